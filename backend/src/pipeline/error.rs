//! Request-level failures of the upload pipeline.

use crate::parsing::ParseFailure;
use crate::reduction::TransformError;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Every way an upload can be rejected.
///
/// Display strings are the messages returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Unsupported file type. Upload CSV or Excel only.")]
    UnsupportedFormat { filename: String },

    #[error("Error reading file: {0}")]
    ParseError(#[from] ParseFailure),

    #[error("Uploaded file missing required columns: {missing:?}")]
    MissingColumns { missing: Vec<String> },

    #[error("Uploaded file is empty or unreadable.")]
    EmptyInput,

    #[error("No valid numeric rows found for SVD transformation.")]
    NoValidRows,

    #[error("Model transformation error: {0}")]
    TransformError(#[from] TransformError),
}

impl PipelineError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::NoFileUploaded => "NO_FILE_UPLOADED",
            PipelineError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            PipelineError::ParseError(_) => "PARSE_ERROR",
            PipelineError::MissingColumns { .. } => "MISSING_COLUMNS",
            PipelineError::EmptyInput => "EMPTY_INPUT",
            PipelineError::NoValidRows => "NO_VALID_ROWS",
            PipelineError::TransformError(_) => "TRANSFORM_ERROR",
        }
    }
}
