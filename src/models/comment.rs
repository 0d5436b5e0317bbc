use serde::{Deserialize, Serialize};

/// Label assigned to a comment by the analysis backend.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Agree,
    Disagree,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Agree, Sentiment::Disagree, Sentiment::Neutral];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Agree => "Agree",
            Sentiment::Disagree => "Disagree",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub video_id: String,
    pub comment_id: String,
    pub masked_username: String,
    pub text: String,
    pub timestamp: String,
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_shape() {
        let raw = r#"{
            "videoId": "dQw4w9WgXcQ",
            "commentId": "Ugx1",
            "maskedUsername": "user_4f2a",
            "text": "Great explanation",
            "timestamp": "2024-03-05T12:00:00Z",
            "sentiment": "Agree"
        }"#;

        let comment: Comment = serde_json::from_str(raw).unwrap();
        assert_eq!(comment.video_id, "dQw4w9WgXcQ");
        assert_eq!(comment.masked_username, "user_4f2a");
        assert_eq!(comment.sentiment, Sentiment::Agree);
    }

    #[test]
    fn test_rejects_unknown_sentiment() {
        let raw = r#"{
            "videoId": "v", "commentId": "c", "maskedUsername": "u",
            "text": "t", "timestamp": "2024-03-05T12:00:00Z", "sentiment": "Angry"
        }"#;
        assert!(serde_json::from_str::<Comment>(raw).is_err());
    }
}
