//! Raw uploaded table as read from a CSV or Excel file.
//!
//! Cells keep whatever kind the source format gave them. Nothing here is
//! numeric-coerced yet; that happens in [`crate::preprocessing::cleaning`].

use std::fmt;

/// A single cell value straight from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl RawValue {
    /// Short kind label used in upload diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Empty => "empty",
            RawValue::Text(_) => "text",
            RawValue::Number(_) => "number",
            RawValue::Bool(_) => "bool",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Empty => Ok(()),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Bool(true) => f.write_str("True"),
            RawValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// A named column of raw cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<RawValue>,
}

/// Ordered set of named columns, all of the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadedTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl UploadedTable {
    /// Build a table from a header row and row-major records.
    ///
    /// Records shorter than the header are padded with [`RawValue::Empty`];
    /// callers reject longer records before getting here. Blank header cells
    /// become `Unnamed: <index>` and repeated names get `.1`, `.2`, ...
    /// appended so that lookups stay unambiguous.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<RawValue>>) -> Self {
        let headers = dedupe_headers(headers);
        let n_rows = rows.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(n_rows),
            })
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.values.push(cells.next().unwrap_or(RawValue::Empty));
            }
        }

        Self { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Remove a column by name. Returns whether it was present.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        self.columns.len() != before
    }

    /// Per-column summary of the cell kinds present, e.g. `SAT: number|empty`.
    pub fn kinds_summary(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                let mut kinds: Vec<&str> = Vec::new();
                for value in &column.values {
                    let kind = value.kind();
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
                if kinds.is_empty() {
                    kinds.push("empty");
                }
                format!("{}: {}", column.name, kinds.join("|"))
            })
            .collect()
    }
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for (index, name) in headers.into_iter().enumerate() {
        let name = if name.is_empty() {
            format!("Unnamed: {}", index)
        } else {
            name
        };
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }
    seen
}
