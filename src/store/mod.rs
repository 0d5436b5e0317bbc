use leptos::*;

mod api;
mod request;
mod state;

pub use api::*;
pub use request::AnalysisRequest;
pub use state::{reduce, CommentsAction, CommentsState, RequestStatus, DEFAULT_VIDEO_TITLE};

use crate::models::Comment;

/// Shared comment state for the dashboard. Cheap to copy; every copy points at
/// the same signal.
#[derive(Clone, Copy)]
pub struct CommentsStore {
    state: RwSignal<CommentsState>,
}

impl CommentsStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(CommentsState::default()),
        }
    }

    pub fn dispatch(&self, action: CommentsAction) {
        self.state
            .update(|state| *state = reduce(std::mem::take(state), action));
    }

    #[inline]
    pub fn state(&self) -> RwSignal<CommentsState> {
        self.state
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.state.with(|state| state.items.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(CommentsState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error().map(String::from))
    }

    pub fn video_title(&self) -> String {
        self.state.with(|state| state.video_title.clone())
    }

    pub fn reset(&self) {
        self.dispatch(CommentsAction::Reset);
    }

    pub fn set_video_title(&self, title: impl Into<String>) {
        self.dispatch(CommentsAction::SetVideoTitle(title.into()));
    }

    /// Marks a new request as the one the store is waiting for.
    pub fn begin(&self, video_url: impl Into<String>) -> AnalysisRequest {
        let request = AnalysisRequest::new(video_url);
        self.dispatch(CommentsAction::FetchPending {
            request: request.id(),
        });
        request
    }

    pub fn complete(&self, request: AnalysisRequest, outcome: Result<Vec<Comment>, String>) {
        let request = request.id();
        self.dispatch(match outcome {
            Ok(comments) => CommentsAction::FetchFulfilled { request, comments },
            Err(error) => CommentsAction::FetchRejected { request, error },
        });
    }

    /// Drives one analysis round trip through the server function.
    #[tracing::instrument(skip(self))]
    pub async fn run_analysis(self, video_url: String) {
        let request = self.begin(video_url);
        let outcome = analyze_comments(request.video_url().to_string())
            .await
            .map_err(|err| {
                tracing::error!("Problem while analyzing comments: {err:?}");
                crate::error::describe_server_error(&err)
            });
        self.complete(request, outcome);
    }
}

impl Default for CommentsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_comments_store() -> CommentsStore {
    let store = CommentsStore::new();
    provide_context(store);
    store
}

pub fn use_comments_store() -> CommentsStore {
    use_context::<CommentsStore>().unwrap_or_else(|| {
        tracing::warn!("CommentsStore missing from context, creating a detached one");
        provide_comments_store()
    })
}

#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    provide_comments_store();
    children()
}
