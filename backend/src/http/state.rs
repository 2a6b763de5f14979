//! Application state for the HTTP server.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reduction::{DimensionReducer, SvdModel};

/// Default request body limit for uploads (10 MiB).
pub const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Description of the loaded model, reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub path: String,
    pub fingerprint: String,
    pub n_features: usize,
    pub n_components: usize,
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pre-fit reducer applied to every upload; read-only
    pub reducer: Arc<dyn DimensionReducer>,
    pub model_info: ModelInfo,
    /// Maximum accepted request body size in bytes
    pub upload_limit: usize,
}

impl AppState {
    /// Create a new application state around a loaded reducer.
    pub fn new(reducer: Arc<dyn DimensionReducer>, model_info: ModelInfo) -> Self {
        Self {
            reducer,
            model_info,
            upload_limit: DEFAULT_UPLOAD_LIMIT,
        }
    }

    /// State for an [`SvdModel`] read from `path`.
    pub fn from_svd_model(model: SvdModel, path: &Path) -> Self {
        let model_info = ModelInfo {
            path: path.display().to_string(),
            fingerprint: model.fingerprint().to_string(),
            n_features: model.n_features(),
            n_components: model.n_components(),
        };
        Self::new(Arc::new(model), model_info)
    }

    pub fn with_upload_limit(mut self, limit: usize) -> Self {
        self.upload_limit = limit;
        self
    }
}
