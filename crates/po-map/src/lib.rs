//! Column resolution for purchase-order tables.
//!
//! Input files arrive with whatever headers the exporting system chose. This
//! crate finds the identifier and quantity columns by a fixed priority of exact
//! and substring name matches, and suggests a vendor from the same headers.

#![deny(unsafe_code)]

mod patterns;
mod resolver;
mod suggest;

pub use patterns::{
    FIXED_EXTRACT_COLUMNS, IDENTIFIER_FRAGMENTS, QUANTITY_FRAGMENTS, contains_fragment,
};
pub use resolver::resolve;
pub use suggest::suggest_vendor;
