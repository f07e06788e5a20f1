//! Untyped tabular input as handed over by a reader.

use serde::{Deserialize, Serialize};

/// A scalar cell prior to coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered columns and ordered rows of cells.
///
/// Rows shorter than the column list read as [`CellValue::Missing`] for the
/// absent trailing cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell at (row, column), `Missing` when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        const MISSING: &CellValue = &CellValue::Missing;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(MISSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_read_as_missing() {
        let mut table = Table::new(vec!["Sku".to_string(), "Qty".to_string()]);
        table.push_row(vec!["A-1".into()]);
        assert_eq!(table.cell(0, 0), &CellValue::Text("A-1".to_string()));
        assert_eq!(table.cell(0, 1), &CellValue::Missing);
        assert_eq!(table.cell(5, 0), &CellValue::Missing);
    }

    #[test]
    fn column_index_is_case_sensitive() {
        let table = Table::new(vec!["Sku".to_string(), "QTY".to_string()]);
        assert_eq!(table.column_index("Sku"), Some(0));
        assert_eq!(table.column_index("sku"), None);
    }
}
