//! Integration tests for the conversion stages and settings store.

use std::fs;
use std::path::Path;

use po_cli::pipeline::{
    build_document, choose_po_number, choose_vendor, extract_rows, load_order, output_path,
    write_document,
};
use po_cli::settings::{DirKind, Settings, SettingsStore};
use po_model::{Subformat, Vendor};
use tempfile::TempDir;

fn write_sheet(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn converts_fixed_extract_to_fastserve() {
    let dir = TempDir::new().unwrap();
    let input = write_sheet(
        dir.path(),
        "PO 17633.csv",
        "PO_NUMBER,ITEM_NUMBER,DESCRIPTION,QTY\n17633,SPM6775,Receiver,2\n17633,EFL1234,Motor,1.0\n",
    );

    let table = load_order(&input).unwrap();
    let vendor = choose_vendor(None, &table, &input).unwrap();
    assert_eq!(vendor, Vendor::HorizonHobbyFastServe);

    let po = choose_po_number(None, &input).unwrap();
    let (binding, rows) = extract_rows(&table).unwrap();
    assert_eq!(binding.identifier_column, "ITEM_NUMBER");

    let document = build_document(vendor, None, &po, &rows).unwrap();
    let path = output_path(&document, None, None, &Settings::default(), &input);
    assert_eq!(path, dir.path().join("FastServe-17633.txt"));

    write_document(&path, &document).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "17633 / SPM6775 / 2 / EFL1234 / 1 / END / 2"
    );
}

#[test]
fn converts_item_sheet_to_amain_csv_in_new_folder() {
    let dir = TempDir::new().unwrap();
    let input = write_sheet(dir.path(), "order.csv", "Item,Quantity,Notes\nV-1001,10,\nV-1002,5,rush\n");
    let out_dir = dir.path().join("out").join("amain");

    let table = load_order(&input).unwrap();
    let (_, rows) = extract_rows(&table).unwrap();
    let document = build_document(Vendor::Amain, Some(Subformat::Csv), "55", &rows).unwrap();
    let path = output_path(&document, None, Some(&out_dir), &Settings::default(), &input);

    write_document(&path, &document).unwrap();
    assert_eq!(path, out_dir.join("55_AMAIN.csv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "V-1001,10\nV-1002,5\n");
}

#[test]
fn bad_quantity_stops_before_encoding() {
    let dir = TempDir::new().unwrap();
    let input = write_sheet(dir.path(), "PO 1.csv", "Sku,Qty\nA,abc\n");

    let table = load_order(&input).unwrap();
    let error = extract_rows(&table).unwrap_err();
    assert!(format!("{error:#}").contains("abc"));
}

#[test]
fn settings_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::at(dir.path().join("nested").join("settings.toml"));

    assert_eq!(store.load(), Settings::default());

    store.save(DirKind::Input, Path::new("/orders")).unwrap();
    store.save(DirKind::Output, Path::new("/exports")).unwrap();
    let settings = store.load();
    assert_eq!(settings.get(DirKind::Input), Some(Path::new("/orders")));
    assert_eq!(settings.get(DirKind::Output), Some(Path::new("/exports")));

    assert!(store.clear().unwrap());
    assert!(!store.clear().unwrap());
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(dir.path(), "settings.toml", "input_dir = [not toml");
    assert_eq!(SettingsStore::at(path).load(), Settings::default());
}
