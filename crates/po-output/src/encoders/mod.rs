//! Vendor encoder trait and registry.
//!
//! Each vendor format is a unit struct implementing [`VendorEncoder`]. The
//! [`EncoderRegistry`] maps a [`Vendor`] to its encoder; adding a vendor means
//! adding an encoder module and registering it in [`EncoderRegistry::default`].
//!
//! # Example
//!
//! ```ignore
//! use po_output::default_registry;
//!
//! let encoder = default_registry().get(Vendor::Stephens)?;
//! let bytes = encoder.encode(None, "17633", &rows)?;
//! ```

mod amain;
mod delimited;
mod fastserve;
mod hrp;
mod stephens;
mod traxxas;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};

pub use amain::AmainEncoder;
pub use fastserve::FastServeEncoder;
pub use hrp::HrpEncoder;
pub use stephens::StephensEncoder;
pub use traxxas::TraxxasEncoder;

/// Sentinel separating the item list from the trailing count.
pub(crate) const END_MARKER: &str = "END";

/// Renders order lines into one vendor's import format.
///
/// Encoders are pure: the same input always produces the same bytes, and an
/// empty row list is valid input.
pub trait VendorEncoder: Send + Sync {
    /// Vendor this encoder renders for.
    fn vendor(&self) -> Vendor;

    /// Render a complete document.
    ///
    /// `subformat` has already been validated and defaulted by the dispatcher;
    /// single-format vendors receive `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be rendered (e.g. a rewritten
    /// identifier is empty) or the sub-format does not belong to the vendor.
    fn encode(
        &self,
        subformat: Option<Subformat>,
        po_number: &str,
        rows: &[NormalizedRow],
    ) -> Result<Vec<u8>, FormatError>;
}

/// Registry of encoders indexed by vendor.
pub struct EncoderRegistry {
    encoders: BTreeMap<Vendor, Box<dyn VendorEncoder>>,
}

impl EncoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            encoders: BTreeMap::new(),
        }
    }

    /// Registers an encoder, replacing any previous one for the same vendor.
    pub fn register(&mut self, encoder: Box<dyn VendorEncoder>) {
        self.encoders.insert(encoder.vendor(), encoder);
    }

    /// Encoder for the vendor.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownVendor`] if no encoder is registered.
    pub fn get(&self, vendor: Vendor) -> Result<&dyn VendorEncoder, FormatError> {
        self.encoders
            .get(&vendor)
            .map(AsRef::as_ref)
            .ok_or_else(|| FormatError::UnknownVendor(vendor.to_string()))
    }

    /// Registered vendors in order.
    pub fn vendors(&self) -> impl Iterator<Item = Vendor> + '_ {
        self.encoders.keys().copied()
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FastServeEncoder));
        registry.register(Box::new(StephensEncoder));
        registry.register(Box::new(HrpEncoder));
        registry.register(Box::new(AmainEncoder));
        registry.register(Box::new(TraxxasEncoder));
        registry
    }
}

/// Process-wide registry with every built-in encoder.
pub fn default_registry() -> &'static EncoderRegistry {
    static REGISTRY: OnceLock<EncoderRegistry> = OnceLock::new();
    REGISTRY.get_or_init(EncoderRegistry::default)
}

pub(crate) fn unexpected_subformat(vendor: Vendor, subformat: Option<Subformat>) -> FormatError {
    FormatError::UnknownSubformat {
        vendor,
        value: subformat.map_or_else(|| "none".to_string(), |s| s.to_string()),
    }
}
