//! Router configuration for the HTTP service.
//!
//! This module sets up all routes and middleware (body limit, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.upload_limit;

    Router::new()
        .route("/", get(handlers::landing_page))
        .route("/success", post(handlers::upload))
        .route("/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
