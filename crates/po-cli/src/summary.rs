use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use po_model::{Subformat, Vendor};
use po_output::output_target;
use po_transform::cell_to_identifier;

use crate::types::{ConvertOutcome, Destination, Inspection};

const PO_PLACEHOLDER: &str = "<PO>";

pub fn print_convert_summary(outcome: &ConvertOutcome) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let format = outcome
        .subformat
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    let (label, target) = match &outcome.destination {
        Destination::File(path) => ("Output", path.display().to_string()),
        Destination::DryRun(path) => ("Output (dry run)", path.display().to_string()),
        Destination::Stdout => ("Output", "stdout".to_string()),
    };
    table.add_row(vec![label_cell("Input"), Cell::new(outcome.input.display())]);
    table.add_row(vec![label_cell("Vendor"), Cell::new(outcome.vendor)]);
    table.add_row(vec![label_cell("Format"), Cell::new(format)]);
    table.add_row(vec![label_cell("PO number"), Cell::new(&outcome.po_number)]);
    table.add_row(vec![
        label_cell("Columns"),
        Cell::new(format!(
            "{} / {}",
            outcome.binding.identifier_column, outcome.binding.quantity_column
        )),
    ]);
    table.add_row(vec![label_cell("Line items"), Cell::new(outcome.rows)]);
    table.add_row(vec![label_cell("Bytes"), Cell::new(outcome.bytes)]);
    table.add_row(vec![
        label_cell(label),
        Cell::new(target).fg(Color::Green).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_inspection(inspection: &Inspection) {
    println!("Input: {}", inspection.input.display());
    println!("Rows: {}", inspection.row_count);
    match (&inspection.binding, &inspection.binding_error) {
        (Some(binding), _) => println!(
            "Columns: identifier = {}, quantity = {}",
            binding.identifier_column, binding.quantity_column
        ),
        (None, Some(error)) => println!("Columns: {error}"),
        (None, None) => {}
    }
    println!(
        "Suggested vendor: {}",
        inspection
            .suggested_vendor
            .map_or_else(|| "-".to_string(), |v| v.to_string())
    );
    println!(
        "PO number: {}",
        inspection.po_number.as_deref().unwrap_or("-")
    );

    let mut table = Table::new();
    table.set_header(inspection.columns.iter().map(|name| {
        let cell = header_cell(name);
        if is_bound(inspection, name) {
            cell.fg(Color::Green)
        } else {
            cell
        }
    }));
    apply_table_style(&mut table);
    for row in &inspection.preview {
        table.add_row(row.iter().map(|value| Cell::new(cell_to_identifier(value))));
    }
    println!("{table}");
}

pub fn print_vendors() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vendor"),
        header_cell("Formats"),
        header_cell("Default"),
        header_cell("File name"),
    ]);
    apply_table_style(&mut table);
    for vendor in Vendor::all() {
        let formats: Vec<Option<Subformat>> = if vendor.subformats().is_empty() {
            vec![None]
        } else {
            vendor.subformats().iter().copied().map(Some).collect()
        };
        let names: Vec<String> = formats
            .iter()
            .map(|format| output_target(*vendor, *format, PO_PLACEHOLDER).file_name)
            .collect();
        let labels: Vec<&str> = formats
            .iter()
            .map(|format| format.map_or("-", |s| s.as_str()))
            .collect();
        table.add_row(vec![
            Cell::new(vendor).add_attribute(Attribute::Bold),
            Cell::new(labels.join("\n")),
            Cell::new(vendor.default_subformat().map_or("-", |s| s.as_str())),
            Cell::new(names.join("\n")),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn is_bound(inspection: &Inspection, name: &str) -> bool {
    inspection.binding.as_ref().is_some_and(|binding| {
        binding.identifier_column == name || binding.quantity_column == name
    })
}
