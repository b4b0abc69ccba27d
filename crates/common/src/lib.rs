/// Common types and the error taxonomy for the student report pipeline
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback display string for any field that cannot be resolved.
pub const UNKNOWN_LABEL: &str = "غير معروف";

/// A loosely-shaped upload row: header name -> arbitrary JSON value.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

/// Report pipeline errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no valid mark rows after cleaning")]
    NoValidMarks,

    #[error("no valid student rows after cleaning")]
    NoValidStudents,

    #[error("font error: {0}")]
    Font(String),

    #[error("pdf generation failed: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// True for failures the client can fix by uploading usable data.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoValidMarks | Self::NoValidStudents)
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// One cleaned exam-mark row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub course: String,
    pub name: String,
    pub total: f64,
}

/// One cleaned roster row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub corrected_name: String,
    pub classroom: String,
}

/// A mark joined to its classroom, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// 1-based position in the original mark upload, assigned before sorting
    pub serial: u32,
    pub course: String,
    pub name: String,
    pub total: f64,
    pub classroom: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_flagged() {
        assert!(ReportError::NoValidMarks.is_validation());
        assert!(ReportError::NoValidStudents.is_validation());
        assert!(!ReportError::Pdf("boom".to_string()).is_validation());
        assert!(!ReportError::Font("bad".to_string()).is_validation());
    }
}
