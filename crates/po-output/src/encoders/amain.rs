//! AMAIN HOST file and bare pair lists.

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};

use super::{END_MARKER, VendorEncoder, unexpected_subformat};

/// Annotated HOST layout, or headerless `sku<delim>qty` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmainEncoder;

impl AmainEncoder {
    fn host(po_number: &str, rows: &[NormalizedRow]) -> String {
        let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
        lines.push(format!("{po_number} [This is your PO number]"));
        for row in rows {
            lines.push(format!("{} [Product to Order]", row.identifier));
            lines.push(format!(
                "{} [Qty to order for {}]",
                row.quantity, row.identifier
            ));
        }
        lines.push(format!(
            "{END_MARKER} [Added to every HOST file, represents END of list]"
        ));
        lines.push(format!(
            "{} [Total number of line items added, not total of any added]",
            rows.len()
        ));
        lines.join("\n")
    }

    // Values are written verbatim; AMAIN's importer does not unquote.
    fn pairs(rows: &[NormalizedRow], delimiter: char) -> String {
        rows.iter()
            .map(|row| format!("{}{delimiter}{}\n", row.identifier, row.quantity))
            .collect()
    }
}

impl VendorEncoder for AmainEncoder {
    fn vendor(&self) -> Vendor {
        Vendor::Amain
    }

    fn encode(
        &self,
        subformat: Option<Subformat>,
        po_number: &str,
        rows: &[NormalizedRow],
    ) -> Result<Vec<u8>, FormatError> {
        let text = match subformat {
            Some(Subformat::Host) => Self::host(po_number, rows),
            Some(Subformat::Csv) => Self::pairs(rows, ','),
            Some(Subformat::Tab) => Self::pairs(rows, '\t'),
            other => return Err(unexpected_subformat(self.vendor(), other)),
        };
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_host_file_keeps_markers() {
        let bytes = AmainEncoder.encode(Some(Subformat::Host), "42", &[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "42 [This is your PO number]\n\
             END [Added to every HOST file, represents END of list]\n\
             0 [Total number of line items added, not total of any added]"
        );
    }

    #[test]
    fn pair_lists_have_no_header() {
        let rows = vec![NormalizedRow::new("A,1", 2)];
        let csv = AmainEncoder.encode(Some(Subformat::Csv), "1", &rows).unwrap();
        let tab = AmainEncoder.encode(Some(Subformat::Tab), "1", &rows).unwrap();
        assert_eq!(csv, b"A,1,2\n");
        assert_eq!(tab, b"A,1\t2\n");
    }

    #[test]
    fn empty_pair_list_is_empty() {
        let bytes = AmainEncoder.encode(Some(Subformat::Csv), "1", &[]).unwrap();
        assert!(bytes.is_empty());
    }
}
