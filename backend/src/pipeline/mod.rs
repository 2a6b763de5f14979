//! Upload-transform pipeline.
//!
//! ```text
//! bytes + filename
//!   │ FileFormat::from_filename     → UnsupportedFormat
//!   │ parse_table                   → ParseError
//!   │ n_rows == 0                   → EmptyInput
//!   │ drop UnivID, validate_schema  → MissingColumns
//!   │ clean_features
//!   │ drop_all_missing_rows         → NoValidRows
//!   │ reducer.transform             → TransformError
//!   ▼ realign identifiers by source row
//! ResultTable
//! ```
//!
//! The reducer is passed in by the caller; nothing here holds global state.

pub mod error;

pub use error::{PipelineError, PipelineResult};

use ndarray::Array2;
use tracing::{debug, info};

use crate::models::{
    FilteredMatrix, RequiredSchema, ResultRow, ResultTable, ValidatedTable, DROPPED_COLUMN,
    N_COMPONENTS,
};
use crate::parsing::{parse_table, FileFormat};
use crate::preprocessing::{cleaning, clean_features, drop_all_missing_rows, validate_schema};
use crate::reduction::{DimensionReducer, TransformError};

/// Run one upload through the whole pipeline.
///
/// # Arguments
/// * `bytes` - Raw file content
/// * `filename` - Client-supplied filename, used only for format detection
/// * `reducer` - Pre-fit model applied to the cleaned features
pub fn process(
    bytes: &[u8],
    filename: &str,
    reducer: &dyn DimensionReducer,
) -> PipelineResult<ResultTable> {
    process_with_schema(bytes, filename, reducer, &RequiredSchema::default())
}

/// [`process`] against an explicit schema.
pub fn process_with_schema(
    bytes: &[u8],
    filename: &str,
    reducer: &dyn DimensionReducer,
    schema: &RequiredSchema,
) -> PipelineResult<ResultTable> {
    if filename.trim().is_empty() {
        return Err(PipelineError::NoFileUploaded);
    }
    info!(filename, bytes = bytes.len(), "Uploaded file");

    let format = FileFormat::from_filename(filename).ok_or_else(|| {
        PipelineError::UnsupportedFormat {
            filename: filename.to_string(),
        }
    })?;

    let mut table = parse_table(bytes, format)?;
    info!(format = %format, columns = ?table.column_names(), "Parsed upload");
    info!(rows = table.n_rows(), cols = table.n_columns(), "Shape");
    info!(dtypes = ?table.kinds_summary(), "Column kinds");

    if table.n_rows() == 0 {
        return Err(PipelineError::EmptyInput);
    }

    table.drop_column(DROPPED_COLUMN);

    let validated = validate_schema(&table, schema).map_err(|missing| {
        info!(missing = ?missing.0, "Missing required columns");
        PipelineError::MissingColumns { missing: missing.0 }
    })?;

    let cleaned = clean_features(&validated);
    debug!(
        missing_cells = cleaned.missing_cells(),
        missing_per_column = ?cleaning::missing_per_column(&cleaned),
        "Cleaned numeric features"
    );

    let filtered = drop_all_missing_rows(&cleaned);
    info!(
        rows_before = cleaned.n_rows(),
        rows_after = filtered.n_rows(),
        "Dropped fully missing rows"
    );
    if filtered.is_empty() {
        return Err(PipelineError::NoValidRows);
    }

    let components = reducer.transform(&filtered.rows)?;

    assemble_result(&validated, &filtered, components)
}

/// Join identifiers to transformed rows by original row position.
fn assemble_result(
    validated: &ValidatedTable,
    filtered: &FilteredMatrix,
    components: Array2<f64>,
) -> PipelineResult<ResultTable> {
    if components.nrows() != filtered.n_rows() {
        return Err(TransformError::RowCountMismatch {
            expected: filtered.n_rows(),
            found: components.nrows(),
        }
        .into());
    }
    if components.ncols() != N_COMPONENTS {
        return Err(TransformError::ComponentMismatch {
            expected: N_COMPONENTS,
            found: components.ncols(),
        }
        .into());
    }

    let rows = filtered
        .source_rows
        .iter()
        .zip(components.rows())
        .map(|(&source_row, values)| {
            let identifier = validated
                .identifiers
                .get(source_row)
                .map(ToString::to_string)
                .unwrap_or_default();
            ResultRow {
                identifier,
                components: std::array::from_fn(|i| values[i]),
            }
        })
        .collect();

    Ok(ResultTable { rows })
}
