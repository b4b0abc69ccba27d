//! Paginated right-to-left table layout.
//!
//! Pure accumulator: turns merged rows into positioned text and rectangle
//! elements per fixed-size page. Nothing here touches the PDF object model,
//! so page breaks and group headers are testable with a stub font.
//!
//! PDF pages have a bottom-left origin; the cursor starts near the top of
//! the page and walks downward, and the table grows leftward from the right
//! margin.

use report_common::MergedRow;

use crate::font::ReportFont;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 40.0;
/// Extra horizontal bound keeping table borders clear of the page edge.
pub const SAFE_MARGIN: f32 = 50.0;
pub const ROW_HEIGHT: f32 = 25.0;

/// Vertical space reserved for the title and timestamp above the table.
const TITLE_BAND: f32 = 80.0;
const TITLE_SIZE: f32 = 20.0;
const HEADER_SIZE: f32 = 12.0;
const CELL_SIZE: f32 = 10.0;
/// The name column absorbs horizontal overflow down to this width.
const MIN_NAME_WIDTH: f32 = 150.0;

/// Report title drawn above the table on the first page.
pub const REPORT_TITLE: &str = "تقارير نتائج الطلاب";

/// Shade used for classroom group-header rows.
pub const GROUP_HEADER_FILL: [f32; 3] = [0.9, 0.9, 0.9];

/// Which merged-row field a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Classroom,
    Total,
    Name,
    Course,
    Serial,
}

/// Static column descriptor; the table reads right-to-left.
#[derive(Debug, Clone)]
pub struct Column {
    pub title: &'static str,
    pub field: ColumnField,
    pub width: f32,
}

/// The five report columns in drawing order (leftmost first); the serial
/// column ends up at the right page edge.
#[must_use]
pub fn report_columns() -> Vec<Column> {
    vec![
        Column {
            title: "الصف",
            field: ColumnField::Classroom,
            width: 60.0,
        },
        Column {
            title: "الدرجة",
            field: ColumnField::Total,
            width: 60.0,
        },
        Column {
            title: "الاسم",
            field: ColumnField::Name,
            width: 270.0,
        },
        Column {
            title: "المادة",
            field: ColumnField::Course,
            width: 130.0,
        },
        Column {
            title: "م",
            field: ColumnField::Serial,
            width: 30.0,
        },
    ]
}

/// Cell text for one field of a merged row.
#[must_use]
pub fn field_text(row: &MergedRow, field: ColumnField) -> String {
    match field {
        ColumnField::Classroom => row.classroom.clone(),
        ColumnField::Total => format_total(row.total),
        ColumnField::Name => row.name.clone(),
        ColumnField::Course => row.course.clone(),
        ColumnField::Serial => row.serial.to_string(),
    }
}

/// Whole totals print without a decimal point ("85", not "85.0").
#[must_use]
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 && total.abs() < 1e15 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    }
}

/// A positioned run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
}

/// An axis-aligned rectangle, stroked and optionally filled.
#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Fill color; only classroom group-header rows are shaded.
    pub fill: Option<[f32; 3]>,
}

/// One laid-out page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub texts: Vec<TextElement>,
    pub rects: Vec<RectElement>,
}

/// Lay out merged rows into bordered-grid pages.
///
/// Single cursor walk: title band and column-header row on the first page
/// only, then data rows with a shaded group-header row inserted on every
/// classroom change (the first row included). A page break happens when the
/// space left above the bottom margin is under one row height; after a break
/// neither the column header nor the open group header is repeated.
#[must_use]
pub fn lay_out_report(rows: &[MergedRow], date_line: &str, font: &dyn ReportFont) -> Vec<PageLayout> {
    let mut columns = report_columns();
    // Nominal width, before any name-column shrink. Group-header rows keep
    // using it, matching the clamped-origin edge case the report accepts.
    let table_width: f32 = columns.iter().map(|c| c.width).sum();
    let start_x = (PAGE_WIDTH - MARGIN - table_width).max(SAFE_MARGIN);

    let mut pages = Vec::new();
    let mut page = PageLayout::default();
    let mut y = PAGE_HEIGHT - MARGIN - TITLE_BAND;

    // Title, right-anchored within the printable width.
    let title_width = font.text_width(REPORT_TITLE, TITLE_SIZE);
    page.texts.push(TextElement {
        x: (PAGE_WIDTH - MARGIN - title_width).min(PAGE_WIDTH - SAFE_MARGIN - title_width),
        y: y + 20.0,
        size: TITLE_SIZE,
        text: REPORT_TITLE.to_string(),
    });

    // Timestamp line, left-anchored.
    page.texts.push(TextElement {
        x: MARGIN.max(SAFE_MARGIN),
        y: y + 10.0,
        size: HEADER_SIZE,
        text: date_line.to_string(),
    });

    y -= 40.0;

    // Shrink the name column by the exact overflow when the nominal widths
    // would cross the left safety margin.
    let overflow = start_x + table_width - (PAGE_WIDTH - SAFE_MARGIN);
    if overflow > 0.0 {
        columns[2].width = (columns[2].width - overflow).max(MIN_NAME_WIDTH);
    }

    // Column header row.
    let mut x = start_x;
    for col in &columns {
        page.rects.push(RectElement {
            x,
            y: y - ROW_HEIGHT,
            width: col.width,
            height: ROW_HEIGHT,
            fill: None,
        });
        let text_width = font.text_width(col.title, HEADER_SIZE);
        page.texts.push(TextElement {
            x: x + (col.width - text_width) / 2.0,
            y: y - 20.0,
            size: HEADER_SIZE,
            text: col.title.to_string(),
        });
        x += col.width;
    }
    y -= ROW_HEIGHT;

    let mut current_classroom: Option<&str> = None;
    for row in rows {
        if y < MARGIN + ROW_HEIGHT {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - MARGIN;
        }

        if current_classroom != Some(row.classroom.as_str()) {
            y -= ROW_HEIGHT;
            page.rects.push(RectElement {
                x: start_x,
                y: y - ROW_HEIGHT,
                width: table_width,
                height: ROW_HEIGHT,
                fill: Some(GROUP_HEADER_FILL),
            });
            let label = format!("الصف: {}", row.classroom);
            let label_width = font.text_width(&label, HEADER_SIZE);
            page.texts.push(TextElement {
                x: start_x + (table_width - label_width) / 2.0,
                y: y - 20.0,
                size: HEADER_SIZE,
                text: label,
            });
            current_classroom = Some(row.classroom.as_str());
            y -= ROW_HEIGHT;
        }

        let mut x = start_x;
        for col in &columns {
            page.rects.push(RectElement {
                x,
                y: y - ROW_HEIGHT,
                width: col.width,
                height: ROW_HEIGHT,
                fill: None,
            });
            let value = field_text(row, col.field);
            let value_width = font.text_width(&value, CELL_SIZE);
            page.texts.push(TextElement {
                x: x + (col.width - value_width) / 2.0,
                y: y - 20.0,
                size: CELL_SIZE,
                text: value,
            });
            x += col.width;
        }
        y -= ROW_HEIGHT;
    }

    pages.push(page);
    pages
}
