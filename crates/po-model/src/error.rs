//! Error types for column resolution, extraction and encoding.

use std::fmt;

use thiserror::Error;

use crate::vendor::Vendor;

/// Maximum number of quantity issues spelled out in the error message.
const MAX_LISTED_ISSUES: usize = 5;

/// Which side of the column binding could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingColumns {
    Identifier,
    Quantity,
    Both,
}

impl fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier (SKU) column"),
            Self::Quantity => write!(f, "quantity column"),
            Self::Both => write!(f, "identifier (SKU) and quantity columns"),
        }
    }
}

/// A single row whose quantity cell could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityIssue {
    /// Zero-based data row index in the source table.
    pub row: usize,
    /// Raw cell value as text.
    pub raw: String,
}

impl fmt::Display for QuantityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: '{}'", self.row, self.raw)
    }
}

/// Errors returned by the formatting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No identifier and/or quantity column could be determined.
    #[error("could not find {missing} (columns: {})", .columns.join(", "))]
    ColumnsNotFound {
        missing: MissingColumns,
        columns: Vec<String>,
    },

    /// One or more quantity cells failed integer coercion.
    #[error("invalid quantity in {} row(s): {}", .issues.len(), summarize_issues(.issues))]
    InvalidQuantity { issues: Vec<QuantityIssue> },

    /// A vendor rewrite left an identifier empty.
    #[error("identifier '{original}' in row {row} is empty after rewriting")]
    EmptyIdentifier { row: usize, original: String },

    /// PO number was empty or whitespace.
    #[error("PO number is required")]
    MissingPoNumber,

    /// Vendor selector was not recognized.
    #[error("unknown vendor '{0}'")]
    UnknownVendor(String),

    /// Sub-format selector is not recognized or not offered by the vendor.
    #[error("unknown output format '{value}' for {vendor}")]
    UnknownSubformat { vendor: Vendor, value: String },

    /// The delimited writer failed while building the document.
    #[error("failed to render {vendor} document: {message}")]
    Render { vendor: Vendor, message: String },
}

fn summarize_issues(issues: &[QuantityIssue]) -> String {
    let mut listed: Vec<String> = issues
        .iter()
        .take(MAX_LISTED_ISSUES)
        .map(ToString::to_string)
        .collect();
    if issues.len() > MAX_LISTED_ISSUES {
        listed.push(format!("and {} more", issues.len() - MAX_LISTED_ISSUES));
    }
    listed.join("; ")
}

pub type Result<T> = std::result::Result<T, FormatError>;
