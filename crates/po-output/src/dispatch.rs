//! Vendor/sub-format dispatch and output naming.

use po_model::{FormatError, NormalizedRow, Subformat, Table, Vendor, VendorDocument};

use crate::encoders::default_registry;

const TEXT_PLAIN: &str = "text/plain";
const TEXT_CSV: &str = "text/csv";
const TEXT_TSV: &str = "text/tab-separated-values";

/// Where and how a vendor document is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub file_name: String,
    pub extension: &'static str,
    pub media_type: &'static str,
}

/// Suggested file name, extension and media type for a document.
///
/// `subformat` must already be defaulted for multi-format vendors.
pub fn output_target(vendor: Vendor, subformat: Option<Subformat>, po_number: &str) -> OutputTarget {
    let (stem, extension, media_type) = match (vendor, subformat) {
        (Vendor::HorizonHobbyFastServe, _) => (format!("FastServe-{po_number}"), "txt", TEXT_PLAIN),
        (Vendor::Stephens, _) => (format!("{po_number}_Stephens"), "txt", TEXT_PLAIN),
        (Vendor::Hrp, Some(Subformat::Tab)) => (format!("{po_number}_HRP"), "txt", TEXT_TSV),
        (Vendor::Hrp, _) => (format!("{po_number}_HRP"), "csv", TEXT_CSV),
        (Vendor::Amain, Some(Subformat::Csv)) => (format!("{po_number}_AMAIN"), "csv", TEXT_CSV),
        (Vendor::Amain, Some(Subformat::Tab)) => (format!("{po_number}_AMAIN"), "txt", TEXT_TSV),
        (Vendor::Amain, _) => (format!("{po_number}_AMAIN"), "txt", TEXT_PLAIN),
        (Vendor::Traxxas, Some(Subformat::Inv)) => (format!("{po_number}_Traxxas"), "inv", TEXT_CSV),
        (Vendor::Traxxas, Some(Subformat::Template)) => {
            (format!("{po_number}_Traxxas_Template"), "csv", TEXT_CSV)
        }
        (Vendor::Traxxas, _) => (format!("{po_number}_Traxxas"), "csv", TEXT_CSV),
    };
    OutputTarget {
        file_name: format!("{stem}.{extension}"),
        extension,
        media_type,
    }
}

fn resolve_subformat(
    vendor: Vendor,
    subformat: Option<Subformat>,
) -> Result<Option<Subformat>, FormatError> {
    match subformat {
        None => Ok(vendor.default_subformat()),
        Some(chosen) if vendor.supports(chosen) => Ok(Some(chosen)),
        Some(chosen) => Err(FormatError::UnknownSubformat {
            vendor,
            value: chosen.to_string(),
        }),
    }
}

/// Encode normalized rows into a named vendor document.
///
/// The PO number is trimmed and must not be empty. A `None` sub-format picks
/// the vendor's default.
///
/// # Errors
///
/// - [`FormatError::MissingPoNumber`] for a blank PO number
/// - [`FormatError::UnknownSubformat`] if the vendor does not offer `subformat`
/// - [`FormatError::EmptyIdentifier`] if a Traxxas rewrite empties a SKU
pub fn encode(
    vendor: Vendor,
    subformat: Option<Subformat>,
    po_number: &str,
    rows: &[NormalizedRow],
) -> Result<VendorDocument, FormatError> {
    let po_number = po_number.trim();
    if po_number.is_empty() {
        return Err(FormatError::MissingPoNumber);
    }
    let subformat = resolve_subformat(vendor, subformat)?;
    let content = default_registry()
        .get(vendor)?
        .encode(subformat, po_number, rows)?;
    let target = output_target(vendor, subformat, po_number);
    Ok(VendorDocument {
        content,
        file_name: target.file_name,
        extension: target.extension,
        media_type: target.media_type,
    })
}

/// [`encode`] with text vendor and sub-format selectors.
///
/// # Errors
///
/// [`FormatError::UnknownVendor`] or [`FormatError::UnknownSubformat`] for
/// unrecognized selectors, plus everything [`encode`] returns.
pub fn encode_named(
    vendor: &str,
    subformat: Option<&str>,
    po_number: &str,
    rows: &[NormalizedRow],
) -> Result<VendorDocument, FormatError> {
    let vendor: Vendor = vendor.parse()?;
    let subformat = subformat
        .map(|value| Subformat::parse_for(vendor, value))
        .transpose()?;
    encode(vendor, subformat, po_number, rows)
}

/// Resolve columns, extract rows and encode in one step.
///
/// # Errors
///
/// Column resolution and extraction errors abort before any encoding.
pub fn format_table(
    table: &Table,
    vendor: Vendor,
    subformat: Option<Subformat>,
    po_number: &str,
) -> Result<VendorDocument, FormatError> {
    let binding = po_map::resolve(table.columns.as_slice())?;
    let rows = po_transform::extract(table, &binding)?;
    encode(vendor, subformat, po_number, &rows)
}
