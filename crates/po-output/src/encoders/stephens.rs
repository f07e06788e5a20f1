//! Stephens one-field-per-line format.

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};

use super::{END_MARKER, VendorEncoder, unexpected_subformat};

#[derive(Debug, Default, Clone, Copy)]
pub struct StephensEncoder;

impl VendorEncoder for StephensEncoder {
    fn vendor(&self) -> Vendor {
        Vendor::Stephens
    }

    fn encode(
        &self,
        subformat: Option<Subformat>,
        po_number: &str,
        rows: &[NormalizedRow],
    ) -> Result<Vec<u8>, FormatError> {
        if subformat.is_some() {
            return Err(unexpected_subformat(self.vendor(), subformat));
        }
        let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
        lines.push(po_number.to_string());
        for row in rows {
            lines.push(row.identifier.clone());
            lines.push(row.quantity.to_string());
        }
        lines.push(END_MARKER.to_string());
        lines.push(rows.len().to_string());
        Ok(lines.join("\n").into_bytes())
    }
}
