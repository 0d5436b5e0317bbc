use leptos::*;

use crate::analytics::{format_percentage, SentimentDistribution};
use crate::models::Sentiment;

fn bar_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Agree => "bar-fill agree",
        Sentiment::Disagree => "bar-fill disagree",
        Sentiment::Neutral => "bar-fill neutral",
    }
}

#[component]
pub fn SentimentBars(distribution: Memo<SentimentDistribution>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"Sentiment Distribution"</h2>
            {Sentiment::ALL
                .into_iter()
                .map(|sentiment| {
                    let percentage = move || distribution.with(|d| d.get(sentiment));
                    view! {
                        <div class="sentiment-bar">
                            <div class="bar-label">
                                <span>{sentiment.label()}</span>
                                <span>{move || format!("{}%", format_percentage(percentage()))}</span>
                            </div>
                            <div class="bar-track">
                                <div
                                    class=bar_color(sentiment)
                                    style=move || format!("width: {}%", percentage())
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
