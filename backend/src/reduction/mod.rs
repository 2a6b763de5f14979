//! Dimensionality reduction behind a trait.
//!
//! The pipeline only sees [`DimensionReducer`]. [`SvdModel`] is the
//! file-backed implementation loaded at start-up; tests substitute their own
//! reducers to exercise failure paths.

pub mod checksum;
pub mod svd;

pub use svd::{ModelError, SvdModel};

use ndarray::Array2;

use crate::models::FeatureRow;

/// Failure raised by a reducer while transforming a matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("X has {found} features, but the model is expecting {expected} features as input")]
    FeatureMismatch { expected: usize, found: usize },

    #[error("Input contains missing values (row {row}, column {column})")]
    MissingValue { row: usize, column: usize },

    #[error("Input contains infinity or a value too large (row {row}, column {column})")]
    NonFinite { row: usize, column: usize },

    #[error("Model returned {found} rows for {expected} input rows")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Model returned {found} components per row, expected {expected}")]
    ComponentMismatch { expected: usize, found: usize },

    #[error("{0}")]
    Model(String),
}

/// A pre-fit transform from feature rows to component rows.
///
/// Implementations are shared read-only across requests.
pub trait DimensionReducer: Send + Sync {
    /// Number of input features the reducer was fit on.
    fn n_features(&self) -> usize;

    /// Number of components produced per row.
    fn n_components(&self) -> usize;

    /// Project every row. The output has one row per input row and one
    /// column per component.
    fn transform(&self, rows: &[FeatureRow]) -> Result<Array2<f64>, TransformError>;
}
