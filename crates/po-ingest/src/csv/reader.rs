//! CSV file reading into tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use po_model::{CellValue, Table};

use crate::error::{IngestError, Result};

use super::value::any_to_cell;

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads a CSV file with a single header row into a [`Table`].
///
/// Column types are inferred from every row, so numeric columns arrive as
/// [`CellValue::Int`] / [`CellValue::Float`] and a column with any
/// non-numeric cell arrives as text. Header names are kept as written. Rows
/// whose cells are all empty are skipped.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    validate_encoding(path)?;

    let csv_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)?;

    let table = dataframe_to_table(&df)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "Loaded CSV"
    );
    Ok(table)
}

fn dataframe_to_table(df: &DataFrame) -> Result<Table> {
    let columns = df
        .get_column_names()
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();
    let mut table = Table::new(columns);

    for idx in 0..df.height() {
        let row = df
            .get_columns()
            .iter()
            .map(|column| column.get(idx).map(any_to_cell))
            .collect::<std::result::Result<Vec<CellValue>, _>>()?;
        if row.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_infers_numbers() {
        let file = create_temp_csv(b"Sku,Qty\nV-1001,10\nV-1002,5\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.columns, vec!["Sku", "Qty"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), &CellValue::Text("V-1001".to_string()));
        assert_eq!(table.cell(1, 1), &CellValue::Int(5));
    }

    #[test]
    fn test_read_csv_table_skips_blank_rows() {
        let file = create_temp_csv(b"Sku,Qty\nA,1\n,\nB,2\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 0), &CellValue::Text("B".to_string()));
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}Sku,Qty\nA,1\n".as_bytes());
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.columns, vec!["Sku", "Qty"]);
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'S', 0]);
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/order.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
