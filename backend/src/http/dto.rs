//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use super::state::ModelInfo;

/// Name of the multipart field carrying the upload.
pub const UPLOAD_FIELD: &str = "file";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Loaded model
    pub model: ModelInfo,
}

/// File pulled out of a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}
