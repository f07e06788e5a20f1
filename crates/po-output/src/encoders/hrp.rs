//! HRP parts sheet.

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};

use super::delimited::{COMMA, TAB, write_sheet};
use super::{VendorEncoder, unexpected_subformat};

const HEADER: [&str; 3] = ["PART #", "QTY", "WAREHOUSE(Optional)"];

/// `PART #,QTY,WAREHOUSE(Optional)` with the warehouse column left blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct HrpEncoder;

impl VendorEncoder for HrpEncoder {
    fn vendor(&self) -> Vendor {
        Vendor::Hrp
    }

    fn encode(
        &self,
        subformat: Option<Subformat>,
        _po_number: &str,
        rows: &[NormalizedRow],
    ) -> Result<Vec<u8>, FormatError> {
        let delimiter = match subformat {
            Some(Subformat::Csv) => COMMA,
            Some(Subformat::Tab) => TAB,
            other => return Err(unexpected_subformat(self.vendor(), other)),
        };
        let records = rows.iter().map(|row| {
            vec![
                row.identifier.clone(),
                row.quantity.to_string(),
                String::new(),
            ]
        });
        write_sheet(self.vendor(), delimiter, &HEADER, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<NormalizedRow> {
        vec![NormalizedRow::new("HRP100", 4), NormalizedRow::new("HRP200", 1)]
    }

    #[test]
    fn comma_sheet() {
        let bytes = HrpEncoder.encode(Some(Subformat::Csv), "1", &rows()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "PART #,QTY,WAREHOUSE(Optional)\nHRP100,4,\nHRP200,1,\n"
        );
    }

    #[test]
    fn tab_sheet() {
        let bytes = HrpEncoder.encode(Some(Subformat::Tab), "1", &rows()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "PART #\tQTY\tWAREHOUSE(Optional)\nHRP100\t4\t\nHRP200\t1\t\n"
        );
    }

    #[test]
    fn requires_a_subformat() {
        assert!(HrpEncoder.encode(None, "1", &rows()).is_err());
        assert!(HrpEncoder.encode(Some(Subformat::Host), "1", &rows()).is_err());
    }
}
