//! Numeric reads of row cells.
//!
//! Two policies apply. Questionnaire items are read leniently: survey
//! non-response must not invalidate a respondent, so anything that is not
//! an integer counts as zero. Counters and magnitudes are read strictly and
//! report `None` when the cell holds no number.

use crate::table::{CellValue, Row};

/// Parses the leading signed integer of `value`, ignoring what follows.
///
/// `"1"`, `" 2 "`, `"3.0"` and `"4abc"` parse; `""`, `"abc"` and `"-"` do not.
pub fn parse_integer_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(digits.len(), |(idx, _)| idx);
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|magnitude| sign * magnitude)
}

/// Parses a string as a finite f64, returning None for invalid or empty strings.
///
/// `inf`, `infinity` and `NaN` spellings are rejected.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient integer read for questionnaire items; absent or malformed is 0.
///
/// Values outside the `i32` range are malformed responses and also read as 0.
pub fn item_value_or_zero(row: &Row, field: &str) -> i64 {
    let value = match row.get(field) {
        Some(CellValue::Integer(value)) => *value,
        Some(CellValue::Real(value)) if value.is_finite() => value.trunc() as i64,
        Some(CellValue::Text(value)) => parse_integer_prefix(value).unwrap_or(0),
        _ => 0,
    };
    i32::try_from(value).map_or(0, i64::from)
}

/// Strict numeric read for counters and magnitudes.
pub fn numeric_value(row: &Row, field: &str) -> Option<f64> {
    match row.get(field)? {
        CellValue::Integer(value) => Some(*value as f64),
        CellValue::Real(value) => Some(*value),
        CellValue::Text(value) => parse_f64(value),
        CellValue::Missing => None,
    }
}
