//! Vendor identifier rewriting rules.
//!
//! Traxxas identifiers may carry a `tra` prefix and a color suffix such as
//! `-RED`. The standard sheet drops the prefix; the template additionally moves
//! the color into its own `variant` column.

use std::sync::LazyLock;

use po_model::{FormatError, NormalizedRow, VariantMapping};
use regex::Regex;

const TRAXXAS_PREFIX: &str = "tra";

/// Trailing `-LETTERS` color suffix.
static VARIANT_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([A-Z]+)$").expect("Invalid variant suffix regex"));

/// Remove a leading `tra` (any case), exactly three characters.
pub fn strip_prefix(identifier: &str) -> &str {
    match identifier.get(..TRAXXAS_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(TRAXXAS_PREFIX) => {
            &identifier[TRAXXAS_PREFIX.len()..]
        }
        _ => identifier,
    }
}

/// True if the identifier ends in a `-LETTERS` suffix.
pub fn has_variant_suffix(identifier: &str) -> bool {
    VARIANT_SUFFIX_REGEX.is_match(identifier)
}

/// True if any identifier in the batch carries a variant suffix.
pub fn batch_has_variants(rows: &[NormalizedRow]) -> bool {
    rows.iter().any(|row| has_variant_suffix(&row.identifier))
}

/// Split a color suffix off an identifier.
///
/// Returns `(identifier, variant)`. `12345-RED` gives `("12345", "Red")`;
/// an identifier without a suffix is returned unchanged with an empty variant.
pub fn extract_variant(identifier: &str) -> (String, String) {
    let Some(captures) = VARIANT_SUFFIX_REGEX.captures(identifier) else {
        return (identifier.to_string(), String::new());
    };
    let (Some(whole), Some(token)) = (captures.get(0), captures.get(1)) else {
        return (identifier.to_string(), String::new());
    };
    (
        identifier[..whole.start()].to_string(),
        VariantMapping::display_name(token.as_str()),
    )
}

/// One line of the Traxxas template sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLine {
    pub sku: String,
    pub quantity: u64,
    pub variant: String,
}

/// Apply prefix strip to every row.
///
/// # Errors
///
/// [`FormatError::EmptyIdentifier`] if a rewritten identifier is empty.
pub fn standard_lines(rows: &[NormalizedRow]) -> Result<Vec<NormalizedRow>, FormatError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let sku = strip_prefix(&row.identifier);
            ensure_not_empty(idx, sku, &row.identifier)?;
            Ok(NormalizedRow::new(sku, row.quantity))
        })
        .collect()
}

/// Apply variant extraction (when the batch has variants) then prefix strip.
///
/// # Errors
///
/// [`FormatError::EmptyIdentifier`] if a rewritten identifier is empty.
pub fn template_lines(rows: &[NormalizedRow]) -> Result<Vec<TemplateLine>, FormatError> {
    let variant_aware = batch_has_variants(rows);
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let (base, variant) = if variant_aware {
                extract_variant(&row.identifier)
            } else {
                (row.identifier.clone(), String::new())
            };
            let sku = strip_prefix(&base);
            ensure_not_empty(idx, sku, &row.identifier)?;
            Ok(TemplateLine {
                sku: sku.to_string(),
                quantity: row.quantity,
                variant,
            })
        })
        .collect()
}

fn ensure_not_empty(row: usize, rewritten: &str, original: &str) -> Result<(), FormatError> {
    if rewritten.is_empty() {
        return Err(FormatError::EmptyIdentifier {
            row,
            original: original.to_string(),
        });
    }
    Ok(())
}
