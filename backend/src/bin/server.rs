//! University SVD HTTP Server Binary
//!
//! This is the main entry point for the upload service.
//! It loads configuration and the pre-fit model, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! MODEL_PATH=backend/svd_model.json cargo run --bin univ-svd-server
//! ```
//!
//! # Environment Variables
//!
//! - `UNIV_SVD_CONFIG`: Path to a TOML config file (default: search for `univ-svd.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MODEL_PATH`: Model artifact (default: svd_model.json)
//! - `MAX_UPLOAD_BYTES`: Request body limit (default: 10 MiB)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use univ_svd::config::ServerConfig;
use univ_svd::http::{create_router, AppState};
use univ_svd::models::RequiredSchema;
use univ_svd::reduction::SvdModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting University SVD server");

    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Load the model once; every request shares it read-only
    let model_path = config.model.path.clone();
    let model = SvdModel::from_file(&model_path)
        .with_context(|| format!("Failed to load SVD model from {}", model_path.display()))?;
    model
        .ensure_compatible(&RequiredSchema::default())
        .context("SVD model does not match the upload schema")?;
    info!(
        path = %model_path.display(),
        fingerprint = model.fingerprint(),
        "SVD model loaded"
    );

    let state = AppState::from_svd_model(model, &model_path)
        .with_upload_limit(config.server.max_upload_bytes);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Upload form: http://{}/", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
