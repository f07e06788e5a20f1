//! HorizonHobby/FastServe single-line order format.

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};

use super::{END_MARKER, VendorEncoder, unexpected_subformat};

const SEPARATOR: &str = " / ";

/// `<PO> / <Sku> / <Qty> / ... / END / <count>` on one line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastServeEncoder;

impl VendorEncoder for FastServeEncoder {
    fn vendor(&self) -> Vendor {
        Vendor::HorizonHobbyFastServe
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
        let mut fields = Vec::with_capacity(rows.len() * 2 + 3);
        fields.push(po_number.to_string());
        for row in rows {
            fields.push(row.identifier.clone());
            fields.push(row.quantity.to_string());
        }
        fields.push(END_MARKER.to_string());
        fields.push(rows.len().to_string());
        Ok(fields.join(SEPARATOR).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_pairs_on_one_line() {
        let rows = vec![NormalizedRow::new("A1", 2), NormalizedRow::new("B2", 10)];
        let bytes = FastServeEncoder.encode(None, "555", &rows).unwrap();
        assert_eq!(bytes, b"555 / A1 / 2 / B2 / 10 / END / 2");
    }

    #[test]
    fn empty_order_still_has_footer() {
        let bytes = FastServeEncoder.encode(None, "17633", &[]).unwrap();
        assert_eq!(bytes, b"17633 / END / 0");
    }

    #[test]
    fn rejects_subformat() {
        assert!(matches!(
            FastServeEncoder.encode(Some(Subformat::Csv), "1", &[]),
            Err(FormatError::UnknownSubformat { .. })
        ));
    }
}
