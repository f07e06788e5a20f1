use serde::{Deserialize, Serialize};

/// Columns chosen for identifier and quantity, resolved once per table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub identifier_column: String,
    pub quantity_column: String,
}

impl ColumnBinding {
    pub fn new(identifier_column: impl Into<String>, quantity_column: impl Into<String>) -> Self {
        Self {
            identifier_column: identifier_column.into(),
            quantity_column: quantity_column.into(),
        }
    }
}

/// One order line after coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub identifier: String,
    pub quantity: u64,
}

impl NormalizedRow {
    pub fn new(identifier: impl Into<String>, quantity: u64) -> Self {
        Self {
            identifier: identifier.into(),
            quantity,
        }
    }
}
