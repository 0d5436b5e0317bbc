mod comment;

pub use comment::{Comment, Sentiment};

use serde::{Deserialize, Serialize};

/// Body of both backend calls.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoUrlRequest {
    pub video_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AnalyzeCommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}
