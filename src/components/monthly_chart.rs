use leptos::*;

use crate::analytics::MonthlyBucket;

/// Bar height as a share of the busiest month. Absent buckets draw nothing.
fn bar_height(count: Option<usize>, peak: usize) -> f64 {
    match count {
        Some(count) if peak > 0 => count as f64 / peak as f64 * 100.0,
        _ => 0.0,
    }
}

#[component]
pub fn MonthlyChart(buckets: Memo<Vec<MonthlyBucket>>) -> impl IntoView {
    let peak = create_memo(move |_| {
        buckets.with(|b| b.iter().filter_map(|bucket| bucket.count).max().unwrap_or_default())
    });

    view! {
        <div class="card">
            <h2 class="card-title">"Monthly Distribution"</h2>
            <Show
                when=move || buckets.with(|b| !b.is_empty())
                fallback=|| view! { <p class="empty-note chart-placeholder">"No monthly data available"</p> }
            >
                <div class="bar-chart" role="img" aria-label="Comments per month">
                    <For
                        each=move || buckets.get()
                        key=|bucket| (bucket.month, bucket.count)
                        children=move |bucket| {
                            let height = bar_height(bucket.count, peak.get_untracked());
                            let title = format!("{}: {} comments", bucket.month, bucket.count.unwrap_or_default());
                            view! {
                                <div class="bar-column" title=title>
                                    <div class="bar" style=format!("height: {height:.1}%")></div>
                                    <span class="bar-axis-label">{bucket.month}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(None, 10), 0.0);
        assert_eq!(bar_height(Some(5), 10), 50.0);
        assert_eq!(bar_height(Some(10), 10), 100.0);
        assert_eq!(bar_height(Some(3), 0), 0.0);
    }
}
