//! Row extraction and SKU rewriting.
//!
//! - **coerce**: cell → identifier text and cell → whole quantity
//! - **extract**: table + binding → ordered [`NormalizedRow`](po_model::NormalizedRow)s
//! - **sku**: vendor identifier rules (prefix strip, variant extraction)

#![deny(unsafe_code)]

pub mod coerce;
pub mod extract;
pub mod sku;

pub use coerce::{cell_to_identifier, cell_to_quantity, format_numeric};
pub use extract::extract;
pub use sku::{
    TemplateLine, batch_has_variants, extract_variant, has_variant_suffix, standard_lines,
    strip_prefix, template_lines,
};
