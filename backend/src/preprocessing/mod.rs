//! Schema validation, numeric cleaning and row filtering.

pub mod cleaning;
pub mod filtering;
pub mod validator;

pub use cleaning::{clean_features, clean_numeric_cell};
pub use filtering::drop_all_missing_rows;
pub use validator::{validate_schema, MissingColumns};
