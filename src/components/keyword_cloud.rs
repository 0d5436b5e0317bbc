use leptos::*;

use crate::analytics::Keyword;

#[component]
pub fn KeywordCloud(keywords: Memo<Vec<Keyword>>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"Top Keywords"</h2>
            <Show
                when=move || keywords.with(|k| !k.is_empty())
                fallback=|| view! { <p class="empty-note">"No keyword data available"</p> }
            >
                <ul class="tag-list" role="list" aria-label="Top keywords">
                    <For
                        each=move || keywords.get().into_iter().enumerate()
                        key=|(i, keyword)| (*i, keyword.word.clone())
                        children=|(_, keyword)| {
                            view! {
                                <li class="tag-pill" title=format!("{} mentions", keyword.count)>
                                    {keyword.word}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
