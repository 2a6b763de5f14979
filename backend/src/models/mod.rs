pub mod matrix;
pub mod schema;
pub mod table;

pub use matrix::*;
pub use schema::*;
pub use table::*;
