//! Upload parsing: pick a reader from the file extension and produce an
//! [`UploadedTable`].
//!
//! - [`csv_reader`]: UTF-8 CSV with a header row
//! - [`excel_reader`]: first worksheet of an `.xlsx` or `.xls` workbook

pub mod csv_reader;
pub mod excel_reader;

use std::fmt;

use crate::models::UploadedTable;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Detect the format from a filename, ignoring case.
    ///
    /// Returns `None` for anything that is not `.csv`, `.xlsx` or `.xls`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.trim().to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Some(FileFormat::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(FileFormat::Xlsx)
        } else if lower.ends_with(".xls") {
            Some(FileFormat::Xls)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Xls => "xls",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons an upload could not be read as a table.
#[derive(Debug, thiserror::Error)]
pub enum ParseFailure {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RaggedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Workbook(String),

    #[error("Workbook contains no worksheets")]
    NoWorksheet,
}

/// Parse raw upload bytes with the reader for `format`.
pub fn parse_table(bytes: &[u8], format: FileFormat) -> Result<UploadedTable, ParseFailure> {
    match format {
        FileFormat::Csv => csv_reader::read_csv(bytes),
        FileFormat::Xlsx => excel_reader::read_xlsx(bytes),
        FileFormat::Xls => excel_reader::read_xls(bytes),
    }
}
