use leptos::*;

use crate::analytics::CommentStatistics;
use crate::models::Sentiment;

/// `1234567` -> `1,234,567`
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[component]
pub fn StatTiles(statistics: Memo<CommentStatistics>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"Comment Statistics"</h2>
            <div class="stat-grid">
                <div class="stat-tile">
                    <h3>"Total Comments"</h3>
                    <p class="stat-value">{move || format_count(statistics.with(|s| s.total))}</p>
                </div>
                {Sentiment::ALL
                    .into_iter()
                    .map(|sentiment| {
                        let class = format!("stat-tile {}", sentiment.label().to_lowercase());
                        view! {
                            <div class=class>
                                <h3>{sentiment.label()}</h3>
                                <p class="stat-value">{move || statistics.with(|s| s.get(sentiment))}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
