use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use po_ingest::{IngestError, read_table};
use po_model::{CellValue, FormatError, NormalizedRow, QuantityIssue};
use tempfile::Builder;

fn temp_sheet(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

fn numbered_rows(count: usize) -> String {
    let mut csv = String::from("Sku,Qty\n");
    for i in 0..count {
        writeln!(csv, "{},1", 1000 + i).unwrap();
    }
    csv
}

#[test]
fn reads_fixed_extract_csv() {
    let file = temp_sheet(
        ".csv",
        b"PO_NUMBER,ITEM_NUMBER,DESCRIPTION,QTY,UNIT_PRICE,TOTAL\n\
          17633,SPM6775,Receiver,2,39.99,79.98\n\
          17633,EFL1234,Motor,1,89.99,89.99\n",
    );
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.columns.len(), 6);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), &CellValue::Int(17633));
    assert_eq!(table.cell(1, 1), &CellValue::Text("EFL1234".to_string()));
    assert_eq!(table.cell(0, 3), &CellValue::Int(2));
    assert_eq!(table.cell(0, 4), &CellValue::Float(39.99));
}

#[test]
fn reads_inv_as_csv() {
    let file = temp_sheet(".inv", b"SKU,QTY\nTRA5521-BLU,3\n");
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.columns, vec!["SKU", "QTY"]);
    assert_eq!(table.cell(0, 0), &CellValue::Text("TRA5521-BLU".to_string()));
}

#[test]
fn float_quantities_survive() {
    let file = temp_sheet(".csv", b"Item,Quantity\nA,7.0\nB,2.5\n");
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.cell(0, 1), &CellValue::Float(7.0));
}

#[test]
fn rejects_unknown_extension() {
    let file = temp_sheet(".txt", b"Sku,Qty\n");
    assert!(matches!(
        read_table(file.path()),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn rejects_utf16_csv() {
    let file = temp_sheet(".csv", &[0xFE, 0xFF, 0, b'S']);
    assert!(matches!(
        read_table(file.path()),
        Err(IngestError::UnsupportedEncoding { .. })
    ));
}

#[test]
fn late_text_sku_after_numeric_run() {
    let mut csv = numbered_rows(120);
    csv.push_str("V-1001,2\n");
    let file = temp_sheet(".csv", csv.as_bytes());
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.row_count(), 121);
    assert_eq!(table.cell(0, 0), &CellValue::Text("1000".to_string()));
    assert_eq!(table.cell(120, 0), &CellValue::Text("V-1001".to_string()));

    let binding = po_map::resolve(table.columns.as_slice()).unwrap();
    let rows = po_transform::extract(&table, &binding).unwrap();
    assert_eq!(rows[0], NormalizedRow::new("1000", 1));
    assert_eq!(rows[120], NormalizedRow::new("V-1001", 2));
}

#[test]
fn late_bad_quantity_reaches_extraction() {
    let mut csv = numbered_rows(120);
    csv.push_str("B,abc\n");
    let file = temp_sheet(".csv", csv.as_bytes());
    let table = read_table(file.path()).unwrap();
    assert_eq!(table.row_count(), 121);

    let binding = po_map::resolve(table.columns.as_slice()).unwrap();
    let err = po_transform::extract(&table, &binding).unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidQuantity {
            issues: vec![QuantityIssue {
                row: 120,
                raw: "abc".to_string(),
            }],
        }
    );
}

#[test]
fn csv_headers_kept_as_written() {
    let file = temp_sheet(".csv", b"Sku,Order Qty, Qty \nA,1,2\n");
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.columns, vec!["Sku", "Order Qty", " Qty "]);
}

#[test]
fn reads_first_worksheet() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/order.xlsx");
    let table = read_table(&path).unwrap();

    // The second worksheet ("Archive") is ignored and the blank row 3 is skipped.
    assert_eq!(table.columns, vec!["Sku", "Qty", "Notes"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 0), &CellValue::Float(1001.0));
    assert_eq!(table.cell(0, 1), &CellValue::Float(7.0));
    assert_eq!(table.cell(0, 2), &CellValue::Missing);
    assert_eq!(table.cell(1, 0), &CellValue::Text("V-1002".to_string()));
    assert_eq!(table.cell(1, 1), &CellValue::Float(2.5));
    assert_eq!(table.cell(1, 2), &CellValue::Text("rush".to_string()));

    let binding = po_map::resolve(table.columns.as_slice()).unwrap();
    let rows = po_transform::extract(&table, &binding).unwrap();
    assert_eq!(
        rows,
        vec![NormalizedRow::new("1001", 7), NormalizedRow::new("V-1002", 2)]
    );
}
