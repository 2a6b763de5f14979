use crate::models::{CleanedNumericMatrix, FeatureRow, FilteredMatrix};

/// True when every feature in the row is missing.
pub fn is_all_missing(row: &FeatureRow) -> bool {
    row.iter().all(Option::is_none)
}

/// Drop rows where all features are missing.
///
/// Partially missing rows are kept as-is. Order is preserved and each
/// surviving row remembers its position in the upload.
pub fn drop_all_missing_rows(matrix: &CleanedNumericMatrix) -> FilteredMatrix {
    let mut filtered = FilteredMatrix::default();
    for (index, row) in matrix.rows.iter().enumerate() {
        if is_all_missing(row) {
            continue;
        }
        filtered.rows.push(*row);
        filtered.source_rows.push(index);
    }
    filtered
}
