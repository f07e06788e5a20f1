//! Input file dispatch and PO-number derivation.

use std::path::Path;

use po_model::Table;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::excel::read_workbook_table;

/// Reader selected from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Comma-delimited text (`.csv`, Traxxas `.inv`).
    Delimited,
    /// Excel workbook (`.xlsx`, `.xlsm`, `.xls`).
    Workbook,
}

impl SourceKind {
    /// Classify a path by its lowercase extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        match extension.as_str() {
            "csv" | "inv" => Ok(Self::Delimited),
            "xlsx" | "xlsm" | "xls" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Lowercase extension without the dot; empty when there is none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Read an order sheet, choosing the reader from the file extension.
pub fn read_table(path: &Path) -> Result<Table> {
    let kind = SourceKind::from_path(path)?;
    tracing::info!(path = %path.display(), ?kind, "Reading order sheet");
    match kind {
        SourceKind::Delimited => read_csv_table(path),
        SourceKind::Workbook => read_workbook_table(path),
    }
}

/// Derive a PO number from a file name.
///
/// Uses the trimmed file stem with a leading `PO` (any case) removed, so
/// `PO 17633.csv` and `po17633.xlsx` both give `17633`.
pub fn po_number_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?.trim();
    let number = match stem.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("po") => stem[2..].trim(),
        _ => stem,
    };
    (!number.is_empty()).then(|| number.to_string())
}
