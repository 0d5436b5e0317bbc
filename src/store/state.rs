use uuid::Uuid;

use crate::error::FETCH_FAILED_MESSAGE;
use crate::models::Comment;

pub const DEFAULT_VIDEO_TITLE: &str = "YouTube Video Analysis";

/// Where the single analysis request currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsState {
    pub status: RequestStatus,
    pub items: Vec<Comment>,
    pub video_id: Option<String>,
    pub video_title: String,
    pub active_request: Option<Uuid>,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            items: Vec::new(),
            video_id: None,
            video_title: DEFAULT_VIDEO_TITLE.to_string(),
            active_request: None,
        }
    }
}

impl CommentsState {
    #[inline]
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommentsAction {
    FetchPending { request: Uuid },
    FetchFulfilled { request: Uuid, comments: Vec<Comment> },
    FetchRejected { request: Uuid, error: String },
    Reset,
    SetVideoTitle(String),
}

/// Applies one action. Completions for any request other than the active one
/// are dropped unchanged.
pub fn reduce(mut state: CommentsState, action: CommentsAction) -> CommentsState {
    match action {
        CommentsAction::FetchPending { request } => {
            state.status = RequestStatus::Loading;
            state.active_request = Some(request);
            state
        }
        CommentsAction::FetchFulfilled { request, comments } => {
            if state.active_request != Some(request) {
                tracing::debug!(%request, "dropping result of a superseded request");
                return state;
            }
            if let Some(first) = comments.first() {
                state.video_id = Some(first.video_id.clone());
            }
            state.items = comments;
            state.status = RequestStatus::Succeeded;
            state.active_request = None;
            state
        }
        CommentsAction::FetchRejected { request, error } => {
            if state.active_request != Some(request) {
                tracing::debug!(%request, "dropping failure of a superseded request");
                return state;
            }
            let error = if error.trim().is_empty() {
                FETCH_FAILED_MESSAGE.to_string()
            } else {
                error
            };
            state.status = RequestStatus::Failed(error);
            state.active_request = None;
            state
        }
        CommentsAction::Reset => CommentsState::default(),
        CommentsAction::SetVideoTitle(title) => {
            state.video_title = title;
            state
        }
    }
}
