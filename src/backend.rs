//! HTTP client for the external analysis backend. Server side only.

use std::sync::OnceLock;
use std::time::Duration;

use crate::config::Config;
use crate::error::{extract_error_message, AnalysisError};
use crate::models::{AnalyzeCommentsResponse, Comment, VideoUrlRequest};

pub const FETCH_COMMENTS_PATH: &str = "/api/youtube/fetch-comments";
pub const ANALYZE_COMMENTS_PATH: &str = "/api/gemini/analyze-comments";

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        Self::new(config.backend_url.clone(), config.request_timeout)
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the backend to pull the video's comments. Only success matters;
    /// the body is logged and dropped.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_comments(&self, video_url: &str) -> Result<(), AnalysisError> {
        let response = self.post(FETCH_COMMENTS_PATH, video_url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;
        tracing::debug!(bytes = body.len(), "pre-check accepted");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn analyze_comments(&self, video_url: &str) -> Result<Vec<Comment>, AnalysisError> {
        let response = self.post(ANALYZE_COMMENTS_PATH, video_url).await?;
        let body: AnalyzeCommentsResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;
        tracing::info!(comments = body.comments.len(), "analysis received");
        Ok(body.comments)
    }

    async fn post(&self, path: &str, video_url: &str) -> Result<reqwest::Response, AnalysisError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(&VideoUrlRequest {
                video_url: video_url.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request to {url} failed: {e:?}");
                AnalysisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "backend rejected {path}");
        Err(AnalysisError::Backend {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

#[tracing::instrument]
pub fn init_backend() -> Result<(), AnalysisError> {
    let client = BackendClient::from_config(Config::global())?;
    BACKEND.set(client).map_err(|_| {
        AnalysisError::Transport("Backend client already initialized".into())
    })
}

/// The process-wide client, built from `Config::global()` on first use.
pub fn get_backend() -> Result<&'static BackendClient, AnalysisError> {
    if let Some(client) = BACKEND.get() {
        return Ok(client);
    }
    let client = BackendClient::from_config(Config::global())?;
    Ok(BACKEND.get_or_init(|| client))
}
