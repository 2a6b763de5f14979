//! HTTP server module.
//!
//! This module provides an axum-based HTTP server that exposes the upload
//! pipeline as a form-driven web page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Multipart upload extraction                            │
//! │  - HTML / plain-text responses                            │
//! │  - Compression, tracing, body limit                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Pipeline (pipeline::process)                             │
//! │  - Parse, validate, clean, filter                         │
//! │  - Transform via the injected reducer                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Renderer (render)                                        │
//! │  - Styled result table, landing page                      │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::{AppState, ModelInfo};
