use uuid::Uuid;

/// One "analyze this video" request. The id is its cancellation token: once
/// the store stops expecting this id, any result for it is discarded.
///
/// Completing a request consumes it, so a request resolves at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct AnalysisRequest {
    id: Uuid,
    video_url: String,
}

impl AnalysisRequest {
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            video_url: video_url.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_get_distinct_tokens() {
        let a = AnalysisRequest::new("https://youtu.be/dQw4w9WgXcQ");
        let b = AnalysisRequest::new("https://youtu.be/dQw4w9WgXcQ");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.video_url(), b.video_url());
    }
}
