//! Order sheet ingestion.
//!
//! Reads the purchase-order spreadsheets users export from their inventory
//! systems into a [`po_model::Table`]:
//!
//! - **CSV / INV**: loaded with Polars, numeric columns inferred from the first
//!   100 rows
//! - **XLSX / XLSM / XLS**: first worksheet via calamine, first row as header
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use po_ingest::{po_number_from_path, read_table};
//!
//! let path = Path::new("PO 17633.csv");
//! let table = read_table(path)?;
//! let po = po_number_from_path(path); // Some("17633")
//! ```

mod csv;
mod error;
mod excel;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv::{read_csv_table, validate_encoding};
pub use excel::read_workbook_table;
pub use source::{SourceKind, po_number_from_path, read_table};
