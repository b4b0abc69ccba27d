//! Paginated right-to-left PDF rendering for the student marks report.
//!
//! Split into three layers so pagination stays testable without a real font
//! or any drawing calls:
//! - [`layout`]: pure accumulator turning merged rows into positioned
//!   text/rectangle elements per page
//! - [`font`]: TTF metrics and CID-keyed Type0 embedding
//! - [`writer`]: lopdf document assembly from laid-out pages

mod font;
mod layout;
mod writer;

use report_common::ReportError;
use thiserror::Error;

pub use font::{EmbeddedFont, ReportFont};
pub use layout::{
    field_text, format_total, lay_out_report, report_columns, Column, ColumnField, PageLayout,
    RectElement, TextElement, GROUP_HEADER_FILL, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, REPORT_TITLE,
    ROW_HEIGHT, SAFE_MARGIN,
};
pub use writer::write_document;

/// Errors specific to PDF rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font error: {0}")]
    Font(String),

    #[error("pdf write failed: {0}")]
    Pdf(String),
}

impl From<RenderError> for ReportError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Font(msg) => ReportError::Font(msg),
            RenderError::Pdf(msg) => ReportError::Pdf(msg),
        }
    }
}
