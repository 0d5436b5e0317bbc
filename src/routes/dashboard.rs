use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::analytics::DashboardInsights;
use crate::components::{
    ErrorPanel, ExportButton, KeywordCloud, LoadingSpinner, MonthlyChart, SentimentBars, StatTiles,
};
use crate::models::Comment;
use crate::store::{use_comments_store, RequestStatus};
use crate::validation::extract_video_id;

const LOADING_MESSAGE: &str = "Analyzing comments...";

/// Where a visit to `/dashboard` ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DashboardTarget {
    Analyze(String),
    Submit,
}

/// Only a URL handed over by the form opens the dashboard. Whatever the store
/// still holds from an earlier visit does not count.
fn dashboard_target(carried_url: Option<String>) -> DashboardTarget {
    match carried_url {
        Some(url) if !url.trim().is_empty() => DashboardTarget::Analyze(url),
        _ => DashboardTarget::Submit,
    }
}

/// Results page. History state is only visible in the browser, so the server
/// renders the spinner and the client decides between fetching and going
/// back to `/`. History state survives a reload.
#[tracing::instrument]
#[component]
pub fn DashboardPage() -> impl IntoView {
    let location = use_location();
    let target = create_rw_signal(None::<DashboardTarget>);

    create_effect(move |_| {
        let carried = location.state.with_untracked(carried_video_url);
        target.set(Some(dashboard_target(carried)));
    });

    move || match target.get() {
        None => view! { <LoadingSpinner message=LOADING_MESSAGE/> }.into_view(),
        Some(DashboardTarget::Analyze(video_url)) => view! { <Dashboard video_url/> }.into_view(),
        Some(DashboardTarget::Submit) => {
            tracing::info!("dashboard opened without a video URL, redirecting");
            view! { <Redirect path="/"/> }.into_view()
        }
    }
}

#[cfg(feature = "hydrate")]
fn carried_video_url(state: &leptos_router::State) -> Option<String> {
    state.0.as_ref().and_then(|value| value.as_string())
}

#[cfg(not(feature = "hydrate"))]
fn carried_video_url(_state: &leptos_router::State) -> Option<String> {
    None
}

#[component]
fn Dashboard(video_url: String) -> impl IntoView {
    let store = use_comments_store();

    create_effect(move |_| {
        store.reset();
        if let Some(video_id) = extract_video_id(&video_url) {
            store.set_video_title(format!("Video {video_id}"));
        }
        spawn_local(store.run_analysis(video_url.clone()));
    });

    on_cleanup(move || store.reset());

    let loading = create_memo(move |_| store.is_loading());
    let error = create_memo(move |_| store.error());
    let succeeded =
        create_memo(move |_| store.state().with(|s| s.status == RequestStatus::Succeeded));
    let comments = create_memo(move |_| store.comments());

    view! {
        <Title text=move || store.video_title()/>
        <div class="dashboard" aria-busy=move || loading.get().to_string()>
            {move || match error.get() {
                Some(message) => view! { <ErrorPanel message/> }.into_view(),
                None if succeeded.get() => view! { <Results comments/> }.into_view(),
                None => view! { <LoadingSpinner message=LOADING_MESSAGE/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Results(comments: Memo<Vec<Comment>>) -> impl IntoView {
    let insights = create_memo(move |_| comments.with(|c| DashboardInsights::from_comments(c)));

    let distribution = create_memo(move |_| insights.with(|i| i.distribution.clone()));
    let statistics = create_memo(move |_| insights.with(|i| i.statistics.clone()));
    let monthly = create_memo(move |_| insights.with(|i| i.monthly.clone()));
    let keywords = create_memo(move |_| insights.with(|i| i.keywords.clone()));

    view! {
        <div class="dashboard-page">
            <div class="container">
                <div class="dashboard-nav">
                    <A href="/" class="back-link">
                        <i class="ion-arrow-left-c"></i>
                        " Back to Search"
                    </A>
                </div>

                <div class="dashboard-header">
                    <h1>"Analysis Results"</h1>
                    <ExportButton comments/>
                </div>

                <Show
                    when=move || insights.with(|i| !i.is_empty())
                    fallback=|| view! {
                        <div class="card empty-note">
                            "No comments data available. Try analyzing a different video."
                        </div>
                    }
                >
                    <div class="dashboard-grid">
                        <SentimentBars distribution/>
                        <StatTiles statistics/>
                        <MonthlyChart buckets=monthly/>
                        <KeywordCloud keywords/>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::comment;
    use crate::models::Sentiment;
    use crate::store::CommentsStore;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn test_carried_url_opens_dashboard() {
        assert_eq!(
            dashboard_target(Some(URL.to_string())),
            DashboardTarget::Analyze(URL.to_string())
        );
    }

    #[test]
    fn test_missing_url_goes_back_to_form() {
        assert_eq!(dashboard_target(None), DashboardTarget::Submit);
        assert_eq!(dashboard_target(Some("   ".into())), DashboardTarget::Submit);
    }

    #[test]
    fn test_reset_after_success_then_direct_visit_redirects() {
        let runtime = create_runtime();

        let store = CommentsStore::new();
        let request = store.begin(URL);
        store.complete(
            request,
            Ok(vec![comment("1", "great video", "2024-01-01T00:00:00", Sentiment::Agree)]),
        );
        assert_eq!(store.comments().len(), 1);

        store.reset();
        assert!(store.comments().is_empty());
        assert_eq!(dashboard_target(None), DashboardTarget::Submit);

        runtime.dispose();
    }
}
