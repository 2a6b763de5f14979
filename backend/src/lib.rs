//! # University SVD Service
//!
//! Upload a university dataset (CSV or Excel), clean its numeric columns and
//! project them through a pre-fit truncated SVD, then view the components
//! next to each university's name as an HTML table.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Raw upload table, required schema, typed matrices and results
//! - [`parsing`]: File-type dispatch and the CSV / Excel readers
//! - [`preprocessing`]: Schema validation, numeric cleaning, row filtering
//! - [`reduction`]: The `DimensionReducer` seam and the file-backed SVD model
//! - [`pipeline`]: The single-pass upload → result pipeline
//! - [`render`]: HTML pages
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Error handling
//!
//! Per-cell parse failures never fail a request; they become missing values.
//! Structural problems (bad format, missing columns, nothing usable) are
//! returned as [`pipeline::PipelineError`] variants.

pub mod config;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod preprocessing;
pub mod reduction;
pub mod render;

#[cfg(feature = "http-server")]
pub mod http;
