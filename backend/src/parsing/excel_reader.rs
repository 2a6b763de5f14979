use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

use calamine::{Data, Range, Reader, Xls, Xlsx};

use super::ParseFailure;
use crate::models::{RawValue, UploadedTable};

/// Read the first worksheet of an `.xlsx` workbook.
pub fn read_xlsx(bytes: &[u8]) -> Result<UploadedTable, ParseFailure> {
    let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ParseFailure::Workbook(format!("Failed to open Excel file: {}", e)))?;
    first_sheet(workbook).map(|range| table_from_range(&range))
}

/// Read the first worksheet of a legacy `.xls` workbook.
pub fn read_xls(bytes: &[u8]) -> Result<UploadedTable, ParseFailure> {
    let workbook: Xls<_> = Xls::new(Cursor::new(bytes))
        .map_err(|e| ParseFailure::Workbook(format!("Failed to open Excel file: {}", e)))?;
    first_sheet(workbook).map(|range| table_from_range(&range))
}

fn first_sheet<RS, R>(mut workbook: R) -> Result<Range<Data>, ParseFailure>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    workbook
        .worksheet_range_at(0)
        .ok_or(ParseFailure::NoWorksheet)?
        .map_err(|e| ParseFailure::Workbook(format!("Failed to read Excel range: {}", e)))
}

/// Convert a worksheet range into a table. The first row is the header.
pub fn table_from_range(range: &Range<Data>) -> UploadedTable {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return UploadedTable::default(),
    };

    let records = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    UploadedTable::from_rows(headers, records)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Bool(*b),
        // Dates, durations and cell errors are never valid features; keep
        // their text so cleaning marks them missing.
        other => RawValue::Text(other.to_string()),
    }
}
