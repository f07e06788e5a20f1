//! Vendor document generation.
//!
//! This crate renders normalized order lines into the import formats of the
//! supported ordering portals:
//!
//! - **HorizonHobby/FastServe**: single ` / `-separated line with `END` and count
//! - **Stephens**: one field per line with `END` and count
//! - **HRP**: `PART #,QTY,WAREHOUSE(Optional)` sheet, comma or tab delimited
//! - **AMAIN**: annotated HOST file, or bare comma/tab pairs
//! - **Traxxas**: `SKU,QTY` sheet (`.csv` or `.inv`) or the variant-aware template
//!
//! [`encode`] is the single entry point; it validates the PO number and
//! sub-format, runs the vendor's encoder and names the resulting document.

#![deny(unsafe_code)]

mod dispatch;
pub mod encoders;

pub use dispatch::{OutputTarget, encode, encode_named, format_table, output_target};
pub use encoders::{EncoderRegistry, VendorEncoder, default_registry};
