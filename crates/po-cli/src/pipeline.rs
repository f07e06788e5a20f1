//! Order conversion stages shared by the CLI commands.
//!
//! Each stage is a plain function so the commands stay thin and the stages
//! can be exercised without a terminal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, trace};

use po_ingest::{po_number_from_path, read_table};
use po_map::{resolve, suggest_vendor};
use po_model::{ColumnBinding, NormalizedRow, Subformat, Table, Vendor, VendorDocument};
use po_output::encode;
use po_transform::extract;

use crate::logging::redact_value;
use crate::settings::Settings;

/// Read an order sheet.
pub fn load_order(path: &Path) -> Result<Table> {
    let table = read_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "Loaded order sheet"
    );
    Ok(table)
}

/// Lowercase extension of the input, used for vendor suggestion.
pub fn input_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Explicit vendor, or the one suggested by the sheet's layout.
pub fn choose_vendor(explicit: Option<Vendor>, table: &Table, input: &Path) -> Result<Vendor> {
    if let Some(vendor) = explicit {
        return Ok(vendor);
    }
    let extension = input_extension(input);
    match suggest_vendor(table.columns.as_slice(), extension.as_deref()) {
        Some(vendor) => {
            info!(%vendor, "Using suggested vendor");
            Ok(vendor)
        }
        None => bail!("no vendor could be suggested for this sheet; pass --vendor"),
    }
}

/// Explicit PO number, or the one derived from the file name.
pub fn choose_po_number(explicit: Option<&str>, input: &Path) -> Result<String> {
    if let Some(po) = explicit {
        return Ok(po.trim().to_string());
    }
    match po_number_from_path(input) {
        Some(po) => {
            debug!(po = %po, "PO number taken from file name");
            Ok(po)
        }
        None => bail!(
            "no PO number in file name '{}'; pass --po",
            input.display()
        ),
    }
}

/// Resolve columns and extract normalized rows.
pub fn extract_rows(table: &Table) -> Result<(ColumnBinding, Vec<NormalizedRow>)> {
    let binding = resolve(table.columns.as_slice()).context("resolve order columns")?;
    debug!(
        identifier = %binding.identifier_column,
        quantity = %binding.quantity_column,
        "Resolved columns"
    );
    let rows = extract(table, &binding).context("extract order lines")?;
    for row in &rows {
        trace!(sku = %redact_value(&row.identifier), quantity = row.quantity, "Order line");
    }
    Ok((binding, rows))
}

/// Encode rows into the vendor document.
pub fn build_document(
    vendor: Vendor,
    subformat: Option<Subformat>,
    po_number: &str,
    rows: &[NormalizedRow],
) -> Result<VendorDocument> {
    let document = encode(vendor, subformat, po_number, rows)
        .with_context(|| format!("encode {vendor} document"))?;
    info!(
        %vendor,
        file_name = %document.file_name,
        bytes = document.len(),
        "Encoded document"
    );
    Ok(document)
}

/// Where the document is written.
///
/// Precedence: `--output`, then `--output-dir`, then the last-used output
/// folder, then the input's folder.
pub fn output_path(
    document: &VendorDocument,
    explicit: Option<&Path>,
    output_dir: Option<&Path>,
    settings: &Settings,
    input: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| settings.output_dir.clone())
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(&document.file_name)
}

/// Write the document bytes, creating missing parent folders.
pub fn write_document(path: &Path, document: &VendorDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, &document.content).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "Wrote vendor document");
    Ok(())
}
