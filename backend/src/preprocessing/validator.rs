//! Schema validation for uploaded tables.
//!
//! Structural problems are rejected here, before any numeric work. The
//! output is a [`ValidatedTable`] holding only the required columns.

use crate::models::{RequiredSchema, UploadedTable, ValidatedTable};

/// Required columns absent from an upload, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns(pub Vec<String>);

/// Check that every required column exists and narrow the table to them.
///
/// Missing names are reported in the order the schema declares them, not the
/// order of the upload's header.
pub fn validate_schema(
    table: &UploadedTable,
    schema: &RequiredSchema,
) -> Result<ValidatedTable, MissingColumns> {
    let missing: Vec<String> = schema
        .required_columns()
        .filter(|name| !table.has_column(name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(MissingColumns(missing));
    }

    let values_of = |name: &str| {
        table
            .column(name)
            .map(|c| c.values.clone())
            .unwrap_or_default()
    };

    Ok(ValidatedTable {
        identifiers: values_of(schema.identifier),
        features: std::array::from_fn(|i| values_of(schema.features[i])),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawValue, FEATURE_COLUMNS};

    fn table_with(headers: &[&str]) -> UploadedTable {
        let row = headers.iter().map(|h| RawValue::Text(format!("{h}-v"))).collect();
        UploadedTable::from_rows(headers.iter().map(|h| h.to_string()).collect(), vec![row])
    }

    #[test]
    fn test_complete_table_passes() {
        let mut headers = vec!["Univ"];
        headers.extend(FEATURE_COLUMNS);
        let validated = validate_schema(&table_with(&headers), &RequiredSchema::default()).unwrap();
        assert_eq!(validated.n_rows(), 1);
        assert_eq!(validated.identifiers[0], RawValue::Text("Univ-v".to_string()));
        assert_eq!(validated.features[5][0], RawValue::Text("GradRate-v".to_string()));
    }

    #[test]
    fn test_features_follow_schema_order_not_input_order() {
        let headers = ["GradRate", "Expenses", "SFRatio", "Accept", "Top10", "SAT", "Univ"];
        let validated = validate_schema(&table_with(&headers), &RequiredSchema::default()).unwrap();
        assert_eq!(validated.features[0][0], RawValue::Text("SAT-v".to_string()));
        assert_eq!(validated.features[5][0], RawValue::Text("GradRate-v".to_string()));
    }

    #[test]
    fn test_missing_columns_reported_in_schema_order() {
        let headers = ["GradRate", "Univ", "SAT", "SFRatio"];
        let err = validate_schema(&table_with(&headers), &RequiredSchema::default()).unwrap_err();
        assert_eq!(
            err,
            MissingColumns(vec!["Top10".into(), "Accept".into(), "Expenses".into()])
        );
    }

    #[test]
    fn test_missing_identifier_is_reported() {
        let err = validate_schema(&table_with(&FEATURE_COLUMNS), &RequiredSchema::default())
            .unwrap_err();
        assert_eq!(err, MissingColumns(vec!["Univ".into()]));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let headers = ["univ", "sat", "Top10", "Accept", "SFRatio", "Expenses", "GradRate"];
        let err = validate_schema(&table_with(&headers), &RequiredSchema::default()).unwrap_err();
        assert_eq!(err, MissingColumns(vec!["Univ".into(), "SAT".into()]));
    }
}
