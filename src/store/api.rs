use leptos::*;

use crate::error::AnalysisError;
use crate::models::Comment;

/// Pre-check run by the submission form before it navigates to the dashboard.
#[tracing::instrument]
#[server(PrecheckVideoAction, "/api")]
pub async fn precheck_video(video_url: String) -> Result<(), ServerFnError> {
    let video_url = crate::validation::parse_video_url(&video_url)
        .map_err(AnalysisError::into_server_error)?;
    let backend = crate::backend::get_backend().map_err(AnalysisError::into_server_error)?;

    backend.fetch_comments(&video_url).await.map_err(|x| {
        tracing::error!("Pre-check failed for {video_url}: {x}");
        x.into_server_error()
    })
}

#[tracing::instrument]
#[server(AnalyzeCommentsAction, "/api")]
pub async fn analyze_comments(video_url: String) -> Result<Vec<Comment>, ServerFnError> {
    let video_url = crate::validation::parse_video_url(&video_url)
        .map_err(AnalysisError::into_server_error)?;
    let backend = crate::backend::get_backend().map_err(AnalysisError::into_server_error)?;

    backend.analyze_comments(&video_url).await.map_err(|x| {
        tracing::error!("Analysis failed for {video_url}: {x}");
        x.into_server_error()
    })
}
