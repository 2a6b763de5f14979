//! HTTP error handling.
//!
//! Upload failures are returned as plain text, matching the HTML form flow:
//! the browser shows the message directly.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::pipeline::PipelineError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Upload rejected by the pipeline
    Pipeline(PipelineError),
    /// Multipart body could not be read
    Upload(MultipartError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Pipeline(e) => {
                warn!(code = e.code(), error = %e, "Upload rejected");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Upload(e) => {
                warn!(error = %e, "Invalid multipart upload");
                (e.status(), format!("Invalid upload: {}", e.body_text()))
            }
            AppError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, message).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Upload(err)
    }
}
