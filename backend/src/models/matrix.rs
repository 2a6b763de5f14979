//! Typed intermediate and final tables produced by the upload pipeline.

use serde::Serialize;

use super::schema::{COMPONENT_COLUMNS, IDENTIFIER_COLUMN, N_COMPONENTS, N_FEATURES};
use super::table::RawValue;

/// One row of cleaned features. `None` marks a missing value.
pub type FeatureRow = [Option<f64>; N_FEATURES];

/// Upload narrowed to the required columns after the schema check.
///
/// Built only by [`crate::preprocessing::validator::validate_schema`], so
/// every field is guaranteed to exist and to have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTable {
    pub identifiers: Vec<RawValue>,
    pub features: [Vec<RawValue>; N_FEATURES],
}

impl ValidatedTable {
    pub fn n_rows(&self) -> usize {
        self.identifiers.len()
    }
}

/// Numeric features after cleaning, one row per source record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanedNumericMatrix {
    pub rows: Vec<FeatureRow>,
}

impl CleanedNumericMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Count of missing cells across the whole matrix.
    pub fn missing_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|v| v.is_none()).count())
            .sum()
    }
}

/// Rows that kept at least one value, with their original positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredMatrix {
    pub rows: Vec<FeatureRow>,
    /// `source_rows[i]` is the index of `rows[i]` in the uploaded table.
    pub source_rows: Vec<usize>,
}

impl FilteredMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One output row: the identifier and its SVD components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub identifier: String,
    pub components: [f64; N_COMPONENTS],
}

/// Final table shown to the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Header labels: identifier followed by `svd0`..`svd5`.
    pub fn column_labels() -> [&'static str; N_COMPONENTS + 1] {
        let mut labels = [IDENTIFIER_COLUMN; N_COMPONENTS + 1];
        labels[1..].copy_from_slice(&COMPONENT_COLUMNS);
        labels
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        N_COMPONENTS + 1
    }
}
