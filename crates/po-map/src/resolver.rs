use po_model::{ColumnBinding, FormatError, MissingColumns};

use crate::patterns::{
    EXACT_IDENTIFIER, EXACT_QUANTITY, FIXED_EXTRACT_COLUMNS, FIXED_IDENTIFIER, FIXED_QUANTITY,
    IDENTIFIER_FRAGMENTS, QUANTITY_FRAGMENTS, contains_fragment, has_exact,
};

/// Resolve the identifier and quantity columns from ordered column names.
///
/// Priority:
/// 1. the fixed `PO_NUMBER`/`ITEM_NUMBER`/`QTY` extract binds `ITEM_NUMBER`/`QTY`;
/// 2. exact `Sku` / `Qty`;
/// 3. the left-most column containing an identifier or quantity fragment.
///
/// # Errors
///
/// Returns [`FormatError::ColumnsNotFound`] naming the side(s) without a candidate.
pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Result<ColumnBinding, FormatError> {
    if FIXED_EXTRACT_COLUMNS
        .iter()
        .all(|name| has_exact(columns, name))
    {
        return Ok(ColumnBinding::new(FIXED_IDENTIFIER, FIXED_QUANTITY));
    }

    let identifier = pick(columns, EXACT_IDENTIFIER, IDENTIFIER_FRAGMENTS);
    let quantity = pick(columns, EXACT_QUANTITY, QUANTITY_FRAGMENTS);

    match (identifier, quantity) {
        (Some(identifier), Some(quantity)) => Ok(ColumnBinding::new(identifier, quantity)),
        (identifier, quantity) => {
            let missing = match (identifier, quantity) {
                (None, None) => MissingColumns::Both,
                (None, _) => MissingColumns::Identifier,
                _ => MissingColumns::Quantity,
            };
            Err(FormatError::ColumnsNotFound {
                missing,
                columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            })
        }
    }
}

fn pick<'a, S: AsRef<str>>(columns: &'a [S], exact: &str, fragments: &[&str]) -> Option<&'a str> {
    if let Some(column) = columns.iter().find(|column| column.as_ref() == exact) {
        return Some(column.as_ref());
    }
    columns
        .iter()
        .map(AsRef::as_ref)
        .find(|name| contains_fragment(name, fragments))
}
