//! Cell coercion.
//!
//! Quantities truncate toward zero (`2.9` → `2`). Negative, non-finite,
//! missing, boolean and non-numeric cells do not coerce.

use po_model::CellValue;

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Text form of an identifier cell.
///
/// Numeric SKUs keep their digits (`1001` and `1001.0` both become `"1001"`);
/// missing cells become the empty string.
pub fn cell_to_identifier(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(text) => text.clone(),
        CellValue::Int(v) => v.to_string(),
        CellValue::Float(v) => format_numeric(*v),
        CellValue::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        CellValue::Missing => String::new(),
    }
}

/// Whole, non-negative quantity for a cell, or `None` when it does not coerce.
pub fn cell_to_quantity(cell: &CellValue) -> Option<u64> {
    match cell {
        CellValue::Int(v) => u64::try_from(*v).ok(),
        CellValue::Float(v) => float_to_quantity(*v),
        CellValue::Text(text) => parse_quantity(text),
        CellValue::Bool(_) | CellValue::Missing => None,
    }
}

fn parse_quantity(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return u64::try_from(value).ok();
    }
    trimmed.parse::<f64>().ok().and_then(float_to_quantity)
}

fn float_to_quantity(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as u64)
}

/// Raw cell text used in error reports.
pub(crate) fn cell_to_raw(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(text) => text.clone(),
        CellValue::Int(v) => v.to_string(),
        CellValue::Float(v) => v.to_string(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Missing => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_and_text_coerce() {
        assert_eq!(cell_to_quantity(&CellValue::Float(7.0)), Some(7));
        assert_eq!(cell_to_quantity(&CellValue::Text("7".into())), Some(7));
        assert_eq!(cell_to_quantity(&CellValue::Text(" 7.0 ".into())), Some(7));
        assert_eq!(cell_to_quantity(&CellValue::Int(12)), Some(12));
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(cell_to_quantity(&CellValue::Float(2.9)), Some(2));
        assert_eq!(cell_to_quantity(&CellValue::Text("3.99".into())), Some(3));
        assert_eq!(cell_to_quantity(&CellValue::Float(0.4)), Some(0));
    }

    #[test]
    fn rejects_non_numeric_negative_and_missing() {
        assert_eq!(cell_to_quantity(&CellValue::Text("abc".into())), None);
        assert_eq!(cell_to_quantity(&CellValue::Text("".into())), None);
        assert_eq!(cell_to_quantity(&CellValue::Int(-1)), None);
        assert_eq!(cell_to_quantity(&CellValue::Float(-0.5)), None);
        assert_eq!(cell_to_quantity(&CellValue::Float(f64::NAN)), None);
        assert_eq!(cell_to_quantity(&CellValue::Bool(true)), None);
        assert_eq!(cell_to_quantity(&CellValue::Missing), None);
    }

    #[test]
    fn numeric_identifiers_render_as_digits() {
        assert_eq!(cell_to_identifier(&CellValue::Int(1001)), "1001");
        assert_eq!(cell_to_identifier(&CellValue::Float(1001.0)), "1001");
        assert_eq!(cell_to_identifier(&CellValue::Float(10.5)), "10.5");
        assert_eq!(cell_to_identifier(&CellValue::Text("V-1001".into())), "V-1001");
        assert_eq!(cell_to_identifier(&CellValue::Missing), "");
    }

    #[test]
    fn format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(2.50), "2.5");
    }
}
