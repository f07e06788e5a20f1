use std::path::PathBuf;

use serde::Serialize;

use po_model::{CellValue, ColumnBinding, Subformat, Vendor};

/// Where a converted document went.
#[derive(Debug, Clone)]
pub enum Destination {
    File(PathBuf),
    /// `--dry-run`: the path that would have been written.
    DryRun(PathBuf),
    Stdout,
}

#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub vendor: Vendor,
    pub subformat: Option<Subformat>,
    pub po_number: String,
    pub binding: ColumnBinding,
    pub rows: usize,
    pub bytes: usize,
    pub destination: Destination,
}

/// Result of `inspect`, printed as tables or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub input: PathBuf,
    pub columns: Vec<String>,
    pub binding: Option<ColumnBinding>,
    pub binding_error: Option<String>,
    pub suggested_vendor: Option<Vendor>,
    pub po_number: Option<String>,
    pub row_count: usize,
    pub preview: Vec<Vec<CellValue>>,
}
