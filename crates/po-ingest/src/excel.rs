//! Excel workbook reading (first worksheet only).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use po_model::{CellValue, Table};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of an `.xlsx`, `.xlsm` or `.xls` workbook.
///
/// The first row is the header, kept as written; fully blank rows are skipped.
pub fn read_workbook_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| IngestError::EmptySheet {
        path: path.to_path_buf(),
    })?;
    let columns = header.iter().map(header_name).collect();
    let mut table = Table::new(columns);

    for row in rows {
        let cells: Vec<CellValue> = row.iter().map(data_to_cell).collect();
        if cells.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(cells);
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "Loaded workbook"
    );
    Ok(table)
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn data_to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        // Dates, durations and error cells are carried as their display text
        other => CellValue::Text(other.to_string()),
    }
}
