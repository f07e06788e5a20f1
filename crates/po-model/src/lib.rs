//! Data model for the PO formatter.
//!
//! This crate defines the types shared by every stage of the pipeline:
//!
//! - **table**: the untyped input [`Table`] handed over by a reader
//! - **row**: [`ColumnBinding`] and [`NormalizedRow`] produced by resolution and extraction
//! - **vendor**: [`Vendor`] and [`Subformat`] selectors
//! - **variant**: the closed color-code [`VariantMapping`]
//! - **document**: the rendered [`VendorDocument`]
//! - **error**: the typed [`FormatError`] returned by the engine

pub mod document;
pub mod error;
pub mod row;
pub mod table;
pub mod variant;
pub mod vendor;

pub use document::VendorDocument;
pub use error::{FormatError, MissingColumns, QuantityIssue, Result};
pub use row::{ColumnBinding, NormalizedRow};
pub use table::{CellValue, Table};
pub use variant::VariantMapping;
pub use vendor::{Subformat, Vendor};
