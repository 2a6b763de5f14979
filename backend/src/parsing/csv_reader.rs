use csv::{ReaderBuilder, Trim};

use super::ParseFailure;
use crate::models::{RawValue, UploadedTable};

/// Read a CSV upload. The first record is the header row.
///
/// Every non-empty field becomes [`RawValue::Text`]; numeric coercion is left
/// to the cleaning stage so that values like `"21,864"` survive intact.
/// Short records are padded, long records are rejected.
pub fn read_csv(bytes: &[u8]) -> Result<UploadedTable, ParseFailure> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            return Err(ParseFailure::RaggedRecord {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(cell_from_field).collect());
    }

    Ok(UploadedTable::from_rows(headers, rows))
}

fn cell_from_field(field: &str) -> RawValue {
    if field.is_empty() {
        RawValue::Empty
    } else {
        RawValue::Text(field.to_string())
    }
}
