//! CSV reading utilities.

mod reader;
mod value;

pub use reader::{read_csv_table, validate_encoding};
