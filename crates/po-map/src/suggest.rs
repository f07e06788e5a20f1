use po_model::Vendor;

use crate::patterns::{FIXED_EXTRACT_COLUMNS, has_exact};

/// Suggest a vendor from a table's headers and source file extension.
///
/// The fixed `PO_NUMBER`/`ITEM_NUMBER`/`QTY` extract comes from the
/// HorizonHobby/FastServe portal. Exact `SKU` and `QTY` headers, or an `.inv`
/// source file, indicate a Traxxas sheet; Traxxas takes precedence when both
/// apply.
pub fn suggest_vendor<S: AsRef<str>>(columns: &[S], extension: Option<&str>) -> Option<Vendor> {
    let is_inv = extension.is_some_and(|ext| ext.eq_ignore_ascii_case("inv"));
    if is_inv || (has_exact(columns, "SKU") && has_exact(columns, "QTY")) {
        return Some(Vendor::Traxxas);
    }
    if FIXED_EXTRACT_COLUMNS
        .iter()
        .all(|name| has_exact(columns, name))
    {
        return Some(Vendor::HorizonHobbyFastServe);
    }
    None
}
