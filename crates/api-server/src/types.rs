//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error messages are Arabic, mirroring the upload UI locale.
pub const MSG_MISSING_INPUT: &str = "البيانات المطلوبة غير موجودة";
pub const MSG_NO_VALID_ROWS: &str = "لا توجد بيانات صالحة في الملفات المرفوعة";
pub const MSG_RENDER_FAILED: &str = "فشل إنشاء ملف PDF";

/// Filename offered to the browser for the generated report.
pub const REPORT_FILENAME: &str = "student_reports.pdf";

/// Report generation request: two spreadsheet uploads decoded client-side
/// into arrays of header-to-value row objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    /// Per-subject exam marks; an absent field is a validation failure
    #[serde(default)]
    pub marks_data: Option<Vec<Value>>,
    /// Roster mapping corrected names to classrooms
    #[serde(default)]
    pub student_data: Option<Vec<Value>>,
}

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
