use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use po_cli::pipeline::{
    build_document, choose_po_number, choose_vendor, extract_rows, input_extension, load_order,
    output_path, write_document,
};
use po_cli::settings::{DirKind, SettingsStore};
use po_ingest::po_number_from_path;
use po_map::{resolve, suggest_vendor};
use po_model::Subformat;

use crate::cli::{ConvertArgs, InspectArgs, SettingsArgs};
use crate::summary::apply_table_style;
use crate::types::{ConvertOutcome, Destination, Inspection};

pub fn run_convert(args: &ConvertArgs, store: &SettingsStore) -> Result<ConvertOutcome> {
    let input = &args.input;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let table = load_order(input)?;
    let vendor = choose_vendor(args.vendor, &table, input)?;
    let subformat = args
        .format
        .as_deref()
        .map(|value| Subformat::parse_for(vendor, value))
        .transpose()?;
    let po_number = choose_po_number(args.po.as_deref(), input)?;
    let (binding, rows) = extract_rows(&table)?;
    let document = build_document(vendor, subformat, &po_number, &rows)?;

    let destination = if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&document.content)
            .and_then(|()| stdout.flush())
            .context("write document to stdout")?;
        Destination::Stdout
    } else {
        let settings = store.load();
        let path = output_path(
            &document,
            args.output.as_deref(),
            args.output_dir.as_deref(),
            &settings,
            input,
        );
        if args.dry_run {
            Destination::DryRun(path)
        } else {
            write_document(&path, &document)?;
            remember_dirs(store, input, &path);
            Destination::File(path)
        }
    };

    Ok(ConvertOutcome {
        input: input.clone(),
        vendor,
        subformat: subformat.or_else(|| vendor.default_subformat()),
        po_number,
        binding,
        rows: rows.len(),
        bytes: document.len(),
        destination,
    })
}

/// Failures here are reported but never fail the conversion.
fn remember_dirs(store: &SettingsStore, input: &Path, output: &Path) {
    let dirs = [(DirKind::Input, input.parent()), (DirKind::Output, output.parent())];
    for (kind, dir) in dirs {
        let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) else {
            continue;
        };
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        if let Err(error) = store.save(kind, &dir) {
            warn!("Failed to remember {kind:?} folder: {error:#}");
        }
    }
}

pub fn run_inspect(args: &InspectArgs) -> Result<Inspection> {
    let table = load_order(&args.input)?;
    let extension = input_extension(&args.input);
    let (binding, binding_error) = match resolve(table.columns.as_slice()) {
        Ok(binding) => (Some(binding), None),
        Err(error) => (None, Some(error.to_string())),
    };
    Ok(Inspection {
        input: args.input.clone(),
        suggested_vendor: suggest_vendor(table.columns.as_slice(), extension.as_deref()),
        po_number: po_number_from_path(&args.input),
        binding,
        binding_error,
        row_count: table.row_count(),
        preview: table.rows.iter().take(args.rows).cloned().collect(),
        columns: table.columns,
    })
}

pub fn print_inspection_json(inspection: &Inspection) -> Result<()> {
    let json = serde_json::to_string_pretty(inspection).context("serialize inspection")?;
    println!("{json}");
    Ok(())
}

pub fn run_settings(args: &SettingsArgs, store: &SettingsStore) -> Result<()> {
    if args.clear {
        if store.clear()? {
            println!("Remembered folders cleared.");
        } else {
            println!("No remembered folders.");
        }
        return Ok(());
    }
    let settings = store.load();
    let show = |dir: Option<&Path>| dir.map_or_else(|| "-".to_string(), |d| d.display().to_string());
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["Setting", "Value"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "Settings file".to_string(),
        show(store.path()),
    ]);
    table.add_row(vec![
        "Last input folder".to_string(),
        show(settings.get(DirKind::Input)),
    ]);
    table.add_row(vec![
        "Last output folder".to_string(),
        show(settings.get(DirKind::Output)),
    ]);
    println!("{table}");
    Ok(())
}
