use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AnalysisError;

static YOUTUBE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})(\S*)?$")
        .unwrap()
});

/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>` shapes with an
/// 11-character id, optionally followed by more query parameters.
#[inline]
pub fn validate_youtube_url(url: &str) -> bool {
    YOUTUBE_URL_REGEX.is_match(url)
}

pub fn extract_video_id(url: &str) -> Option<&str> {
    YOUTUBE_URL_REGEX
        .captures(url)
        .and_then(|captures| captures.get(4))
        .map(|id| id.as_str())
}

#[tracing::instrument]
pub fn parse_video_url(raw: &str) -> Result<String, AnalysisError> {
    let url = raw.trim();
    if validate_youtube_url(url) {
        Ok(url.to_string())
    } else {
        Err(AnalysisError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=2",
            "youtu.be/a-b_c1234XY",
        ] {
            assert!(validate_youtube_url(url), "{url} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_input() {
        for url in [
            "",
            "   ",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/watch?v=short",
            "https://youtu.be/",
            "https://vimeo.com/123456789",
            "https://www.youtube.com/channel/UC1234567890",
            "ftp://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ trailing words",
        ] {
            assert!(!validate_youtube_url(url), "{url:?} should be rejected");
        }
    }

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("https://youtu.be/a-b_c1234XY?si=x"), Some("a-b_c1234XY"));
        assert_eq!(extract_video_id("https://example.com"), None);
    }

    #[test]
    fn test_parse_trims_and_rejects() {
        assert_eq!(
            parse_video_url("  https://youtu.be/dQw4w9WgXcQ \n").as_deref(),
            Ok("https://youtu.be/dQw4w9WgXcQ")
        );
        assert_eq!(
            parse_video_url("not a url"),
            Err(AnalysisError::InvalidUrl("not a url".into()))
        );
    }
}
