use po_model::{ColumnBinding, FormatError, MissingColumns, NormalizedRow, QuantityIssue, Table};

use crate::coerce::{cell_to_identifier, cell_to_quantity, cell_to_raw};

/// Produce one [`NormalizedRow`] per table row, in table order.
///
/// Every row whose quantity fails coercion is reported; no rows are dropped.
///
/// # Errors
///
/// - [`FormatError::ColumnsNotFound`] if a bound column is absent from the table.
/// - [`FormatError::InvalidQuantity`] listing every offending row.
pub fn extract(table: &Table, binding: &ColumnBinding) -> Result<Vec<NormalizedRow>, FormatError> {
    let identifier_idx = table.column_index(&binding.identifier_column);
    let quantity_idx = table.column_index(&binding.quantity_column);
    let (identifier_idx, quantity_idx) = match (identifier_idx, quantity_idx) {
        (Some(identifier), Some(quantity)) => (identifier, quantity),
        (None, None) => return Err(missing(table, MissingColumns::Both)),
        (None, Some(_)) => return Err(missing(table, MissingColumns::Identifier)),
        (Some(_), None) => return Err(missing(table, MissingColumns::Quantity)),
    };

    let mut rows = Vec::with_capacity(table.row_count());
    let mut issues = Vec::new();
    for row in 0..table.row_count() {
        let quantity_cell = table.cell(row, quantity_idx);
        match cell_to_quantity(quantity_cell) {
            Some(quantity) => rows.push(NormalizedRow {
                identifier: cell_to_identifier(table.cell(row, identifier_idx)),
                quantity,
            }),
            None => issues.push(QuantityIssue {
                row,
                raw: cell_to_raw(quantity_cell),
            }),
        }
    }

    if issues.is_empty() {
        Ok(rows)
    } else {
        Err(FormatError::InvalidQuantity { issues })
    }
}

fn missing(table: &Table, missing: MissingColumns) -> FormatError {
    FormatError::ColumnsNotFound {
        missing,
        columns: table.columns.clone(),
    }
}
