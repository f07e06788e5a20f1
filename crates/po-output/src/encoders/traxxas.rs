//! Traxxas order sheets.
//!
//! The standard sheet (also saved as `.inv`) carries `SKU,QTY` with the `TRA`
//! prefix removed. The template sheet additionally splits a trailing colour
//! code into the `variant` column when any row in the batch carries one.

use po_model::{FormatError, NormalizedRow, Subformat, Vendor};
use po_transform::{standard_lines, template_lines};

use super::delimited::{COMMA, write_sheet};
use super::{VendorEncoder, unexpected_subformat};

const STANDARD_HEADER: [&str; 2] = ["SKU", "QTY"];
const TEMPLATE_HEADER: [&str; 4] = ["sku", "qty", "variant", "comment"];

#[derive(Debug, Default, Clone, Copy)]
pub struct TraxxasEncoder;

impl TraxxasEncoder {
    fn standard(&self, rows: &[NormalizedRow]) -> Result<Vec<u8>, FormatError> {
        let records = standard_lines(rows)?
            .into_iter()
            .map(|line| vec![line.identifier, line.quantity.to_string()]);
        write_sheet(self.vendor(), COMMA, &STANDARD_HEADER, records)
    }

    fn template(&self, rows: &[NormalizedRow]) -> Result<Vec<u8>, FormatError> {
        let records = template_lines(rows)?.into_iter().map(|line| {
            vec![
                line.sku,
                line.quantity.to_string(),
                line.variant,
                String::new(),
            ]
        });
        write_sheet(self.vendor(), COMMA, &TEMPLATE_HEADER, records)
    }
}

impl VendorEncoder for TraxxasEncoder {
    fn vendor(&self) -> Vendor {
        Vendor::Traxxas
    }

    fn encode(
        &self,
        subformat: Option<Subformat>,
        _po_number: &str,
        rows: &[NormalizedRow],
    ) -> Result<Vec<u8>, FormatError> {
        match subformat {
            Some(Subformat::Standard | Subformat::Inv) => self.standard(rows),
            Some(Subformat::Template) => self.template(rows),
            other => Err(unexpected_subformat(self.vendor(), other)),
        }
    }
}
