//! Per-cell numeric coercion.
//!
//! A cell that cannot be read as a number is missing, never an error.

use crate::models::{CleanedNumericMatrix, FeatureRow, RawValue, ValidatedTable, N_FEATURES};

/// Thousands separator stripped from numeric text.
const THOUSANDS_SEPARATOR: char = ',';

/// Coerce one raw cell to a number.
///
/// Text has every `,` removed and surrounding whitespace trimmed before
/// parsing. `NaN` (literal or parsed) counts as missing.
pub fn clean_numeric_cell(value: &RawValue) -> Option<f64> {
    let parsed = match value {
        RawValue::Empty | RawValue::Bool(_) => None,
        RawValue::Number(n) => Some(*n),
        RawValue::Text(text) => {
            let stripped: String = text.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();
            stripped.trim().parse::<f64>().ok()
        }
    };
    parsed.filter(|n| !n.is_nan())
}

/// Clean every feature column independently into a row-major matrix.
pub fn clean_features(table: &ValidatedTable) -> CleanedNumericMatrix {
    let rows = (0..table.n_rows())
        .map(|row| -> FeatureRow {
            std::array::from_fn(|col| {
                table.features[col]
                    .get(row)
                    .and_then(clean_numeric_cell)
            })
        })
        .collect();
    CleanedNumericMatrix { rows }
}

/// Per-column count of cells that ended up missing.
pub fn missing_per_column(matrix: &CleanedNumericMatrix) -> [usize; N_FEATURES] {
    let mut counts = [0usize; N_FEATURES];
    for row in &matrix.rows {
        for (count, value) in counts.iter_mut().zip(row.iter()) {
            if value.is_none() {
                *count += 1;
            }
        }
    }
    counts
}
