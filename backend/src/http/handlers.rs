//! HTTP handlers.
//!
//! Each handler corresponds to an endpoint and delegates to the pipeline or
//! the renderer.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use tracing::{info, info_span};
use uuid::Uuid;

use super::dto::{HealthResponse, UploadedFile, UPLOAD_FIELD};
use super::error::AppError;
use super::state::AppState;
use crate::pipeline::{self, PipelineError};
use crate::render;

// =============================================================================
// Pages
// =============================================================================

/// GET /
///
/// Landing page with the upload form.
pub async fn landing_page() -> Html<String> {
    Html(render::render_landing_page())
}

/// POST /success
///
/// Run the uploaded file through the pipeline and render the result table.
/// Rejected uploads return 400 with a plain-text reason.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let upload_id = Uuid::new_v4();
    let span = info_span!("upload", %upload_id);

    let file = read_upload_field(multipart)
        .await?
        .ok_or(PipelineError::NoFileUploaded)?;

    let reducer = Arc::clone(&state.reducer);
    let worker_span = span.clone();
    let result = tokio::task::spawn_blocking(move || {
        let _entered = worker_span.enter();
        pipeline::process(&file.bytes, &file.filename, reducer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let table = result?;
    span.in_scope(|| info!(rows = table.n_rows(), "Upload transformed"));

    Ok(Html(render::render_result_page(&table)))
}

/// Pull the `file` field out of a multipart body. Other fields are ignored.
async fn read_upload_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?.to_vec();
        return Ok(Some(UploadedFile { filename, bytes }));
    }
    Ok(None)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports the service version and the loaded model.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model_info.clone(),
    })
}
