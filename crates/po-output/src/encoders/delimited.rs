//! Shared writer for header-plus-rows sheets.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use po_model::{FormatError, Vendor};

pub(crate) const COMMA: u8 = b',';
pub(crate) const TAB: u8 = b'\t';

/// Write a header and records with minimal quoting and `\n` record endings.
pub(crate) fn write_sheet<R, F>(
    vendor: Vendor,
    delimiter: u8,
    header: &[&str],
    records: R,
) -> Result<Vec<u8>, FormatError>
where
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<[u8]>,
{
    let render_error = |message: String| FormatError::Render { vendor, message };
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer
        .write_record(header)
        .map_err(|e| render_error(e.to_string()))?;
    for record in records {
        writer
            .write_record(&record)
            .map_err(|e| render_error(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| render_error(e.error().to_string()))
}
