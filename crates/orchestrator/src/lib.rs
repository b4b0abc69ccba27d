//! Report assembly: validate, clean, merge, lay out, serialize.
//!
//! This is the single orchestration point of the pipeline. The font is an
//! injected dependency so the pipeline itself never touches the filesystem
//! and callers (HTTP server, CLI, tests) decide where the TTF comes from.

use chrono::Local;
use report_cleaning::{clean_marks, clean_students};
use report_common::{ReportError, Result};
use report_merge::merge_records;
use report_pdf_render::{lay_out_report, write_document, ReportFont};
use serde_json::Value;
use tracing::{debug, info};

/// Generate the complete classroom-grouped marks report.
///
/// Fails with a validation error when cleaning leaves either side empty;
/// the renderer is never reached in that case.
pub fn generate_report(
    marks_rows: &[Value],
    student_rows: &[Value],
    font: &dyn ReportFont,
) -> Result<Vec<u8>> {
    let marks = clean_marks(marks_rows);
    if marks.is_empty() {
        return Err(ReportError::NoValidMarks);
    }
    let students = clean_students(student_rows);
    if students.is_empty() {
        return Err(ReportError::NoValidStudents);
    }

    let rows = merge_records(&marks, &students);
    debug!(rows = rows.len(), "merged records ready for layout");

    let date_line = format!("تاريخ: {}", Local::now().format("%d/%m/%Y"));
    let pages = lay_out_report(&rows, &date_line, font);
    let pdf = write_document(&pages, font).map_err(ReportError::from)?;
    info!(
        rows = rows.len(),
        pages = pages.len(),
        bytes = pdf.len(),
        "report generated"
    );
    Ok(pdf)
}
