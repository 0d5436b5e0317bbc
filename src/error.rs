//! Error types shared by the submission form, the server functions and the
//! backend client.

use leptos::ServerFnError;
use thiserror::Error;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube URL";
pub const PRECHECK_FAILED_MESSAGE: &str = "Failed to analyze video. Please try again.";
pub const GENERIC_REQUEST_MESSAGE: &str = "An error occurred";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch comments";

/// Failures of a single analysis round trip.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// Input does not look like a YouTube watch or short URL
    #[error("invalid YouTube URL: {0:?}")]
    InvalidUrl(String),
    /// Backend answered with a non-success status
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Backend { status: u16, message: Option<String> },
    /// Request never produced a response (connect, timeout, ...)
    #[error("request failed: {0}")]
    Transport(String),
    /// Backend answered with a success status but an unreadable body
    #[error("could not decode backend response: {0}")]
    Decode(String),
}

impl AnalysisError {
    /// Message safe to show the user.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidUrl(_) => INVALID_URL_MESSAGE.into(),
            AnalysisError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            AnalysisError::Backend { message: None, .. } | AnalysisError::Transport(_) => {
                GENERIC_REQUEST_MESSAGE.into()
            }
            AnalysisError::Decode(_) => UNEXPECTED_MESSAGE.into(),
        }
    }

    /// Crosses the server function boundary carrying only the user message;
    /// details stay in the server log.
    pub fn into_server_error(self) -> ServerFnError {
        ServerFnError::ServerError(self.user_message())
    }
}

/// Pulls the human readable part out of a failed server function call.
pub fn describe_server_error(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) if !message.trim().is_empty() => message.clone(),
        ServerFnError::Request(_) => GENERIC_REQUEST_MESSAGE.into(),
        _ => FETCH_FAILED_MESSAGE.into(),
    }
}

/// Reads a backend failure body the way the dashboard expects: a bare JSON
/// string, an object carrying `message` or `error`, or plain text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(message)) => Some(message).filter(|m| !m.is_empty()),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .find(|message| !message.is_empty())
            .map(String::from),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_bodies() {
        assert_eq!(
            extract_error_message(r#"{"message":"Video has comments disabled"}"#).as_deref(),
            Some("Video has comments disabled")
        );
        assert_eq!(
            extract_error_message(r#"{"error":"quota exceeded"}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(
            extract_error_message(r#""plain json string""#).as_deref(),
            Some("plain json string")
        );
        assert_eq!(
            extract_error_message("Bad Gateway").as_deref(),
            Some("Bad Gateway")
        );
    }

    #[test]
    fn test_unusable_error_bodies() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("   "), None);
        assert_eq!(extract_error_message(r#"{"code":500}"#), None);
        assert_eq!(extract_error_message("[1,2,3]"), None);
    }

    #[test]
    fn test_user_messages() {
        let backend = AnalysisError::Backend {
            status: 404,
            message: Some("Video not found".into()),
        };
        assert_eq!(backend.user_message(), "Video not found");

        let anonymous = AnalysisError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(anonymous.user_message(), GENERIC_REQUEST_MESSAGE);
        assert_eq!(
            AnalysisError::Transport("connection refused".into()).user_message(),
            GENERIC_REQUEST_MESSAGE
        );
        assert_eq!(
            AnalysisError::Decode("expected value".into()).user_message(),
            UNEXPECTED_MESSAGE
        );
        assert_eq!(
            AnalysisError::InvalidUrl("nope".into()).user_message(),
            INVALID_URL_MESSAGE
        );
    }

    #[test]
    fn test_server_error_description() {
        let err = AnalysisError::Backend {
            status: 502,
            message: Some("upstream down".into()),
        }
        .into_server_error();
        assert_eq!(describe_server_error(&err), "upstream down");

        let blank = ServerFnError::ServerError(String::new());
        assert_eq!(describe_server_error(&blank), FETCH_FAILED_MESSAGE);
    }
}
