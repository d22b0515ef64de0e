use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Errors raised while serving the page
#[derive(Debug, Error)]
pub enum ServerError {
    /// The page template failed to render
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "an internal error occurred").into_response()
    }
}
