//! Bilingual header-alias resolution.
//!
//! Upload headers come from whatever spreadsheet template the school used,
//! so each logical field is known under a small closed set of Arabic and
//! English spellings. Resolution walks the aliases in priority order and
//! applies the same emptiness rules everywhere.

use report_common::{RawRow, UNKNOWN_LABEL};
use serde_json::Value;

/// Priority-ordered header aliases for one logical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    names: &'static [&'static str],
}

/// Mark upload: the student name, required for a row to be kept.
pub const FULL_NAME: FieldAliases = FieldAliases {
    names: &["الاسم الكامل", "Full Name", "full name", "full_name"],
};

/// Mark upload: subject name.
pub const COURSE: FieldAliases = FieldAliases {
    names: &["المادة", "Course", "course"],
};

/// Mark upload: numeric total, possibly with a grade suffix.
pub const TOTAL: FieldAliases = FieldAliases {
    names: &["المجموع", "Total", "total"],
};

/// Roster upload: canonical name spelling, required for a row to be kept.
pub const CORRECTED_NAME: FieldAliases = FieldAliases {
    names: &["الاسم المصحح", "Corrected Name", "corrected name", "corrected_name"],
};

/// Roster upload: classroom/section label.
pub const CLASSROOM: FieldAliases = FieldAliases {
    names: &["الصف", "Classroom", "classroom"],
};

impl FieldAliases {
    /// First non-empty value under any alias, in priority order.
    #[must_use]
    pub fn resolve<'a>(&self, row: &'a RawRow) -> Option<&'a Value> {
        self.names
            .iter()
            .find_map(|name| row.get(*name).filter(|v| has_content(v)))
    }

    /// Resolved value as display text, or the unknown placeholder.
    #[must_use]
    pub fn resolve_text(&self, row: &RawRow) -> String {
        match self.resolve(row) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Emptiness rule shared by every field: null, blank strings and zero all
/// fall through to the next alias.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Bool(b) => *b,
        Value::Array(_) | Value::Object(_) => true,
    }
}
