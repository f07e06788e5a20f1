/// Columns of the fixed three-column vendor extract.
pub const FIXED_EXTRACT_COLUMNS: [&str; 3] = ["PO_NUMBER", "ITEM_NUMBER", "QTY"];

pub(crate) const FIXED_IDENTIFIER: &str = "ITEM_NUMBER";
pub(crate) const FIXED_QUANTITY: &str = "QTY";

pub(crate) const EXACT_IDENTIFIER: &str = "Sku";
pub(crate) const EXACT_QUANTITY: &str = "Qty";

/// Lowercase fragments that mark a column as an identifier candidate.
pub const IDENTIFIER_FRAGMENTS: &[&str] = &["sku", "item", "part"];

/// Lowercase fragments that mark a column as a quantity candidate.
pub const QUANTITY_FRAGMENTS: &[&str] = &["qty", "quantity"];

/// Case-insensitive substring test against a list of lowercase fragments.
pub fn contains_fragment(name: &str, fragments: &[&str]) -> bool {
    let lower = name.to_lowercase();
    fragments.iter().any(|fragment| lower.contains(fragment))
}

pub(crate) fn has_exact<S: AsRef<str>>(columns: &[S], name: &str) -> bool {
    columns.iter().any(|column| column.as_ref() == name)
}
