//! Record cleaning: loosely-shaped upload rows to typed records.

use report_common::{MarkRecord, StudentRecord};
use serde_json::Value;
use tracing::debug;

use crate::alias;

/// Extract mark records from raw upload rows.
///
/// A row is kept only when it is an object carrying a non-empty student name
/// under any of the known headers; other fields fall back to the unknown
/// placeholder (or 0 for the total). Input order is preserved.
#[must_use]
pub fn clean_marks(rows: &[Value]) -> Vec<MarkRecord> {
    let cleaned: Vec<MarkRecord> = rows
        .iter()
        .filter_map(Value::as_object)
        .filter(|row| alias::FULL_NAME.resolve(row).is_some())
        .map(|row| MarkRecord {
            course: alias::COURSE.resolve_text(row),
            name: alias::FULL_NAME.resolve_text(row),
            total: parse_total(alias::TOTAL.resolve(row)),
        })
        .collect();
    debug!(raw = rows.len(), kept = cleaned.len(), "cleaned mark rows");
    cleaned
}

/// Extract roster records from raw upload rows.
///
/// A row is kept only when it carries a non-empty corrected name.
#[must_use]
pub fn clean_students(rows: &[Value]) -> Vec<StudentRecord> {
    let cleaned: Vec<StudentRecord> = rows
        .iter()
        .filter_map(Value::as_object)
        .filter(|row| alias::CORRECTED_NAME.resolve(row).is_some())
        .map(|row| StudentRecord {
            corrected_name: alias::CORRECTED_NAME.resolve_text(row),
            classroom: alias::CLASSROOM.resolve_text(row),
        })
        .collect();
    debug!(raw = rows.len(), kept = cleaned.len(), "cleaned roster rows");
    cleaned
}

/// Coerce a raw total cell to a number.
///
/// Numbers pass through. Strings may carry thousands separators and a
/// "-"-joined grade suffix ("85-A"); commas are stripped, only the first
/// "-" segment counts, and parsing takes the leading numeric prefix.
/// Anything else yields 0.
#[must_use]
pub fn parse_total(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let no_commas = s.replace(',', "");
            let first = no_commas.split('-').next().unwrap_or("");
            leading_float(first.trim())
        }
        _ => 0.0,
    }
}

/// Parse the longest numeric prefix of `s`, or 0 when no digit is present.
fn leading_float(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}
