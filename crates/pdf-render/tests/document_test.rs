//! Document round-trip tests: lay out rows, serialize, reload with lopdf.

use lopdf::{Dictionary, Document, Object, ObjectId};
use report_common::MergedRow;
use report_pdf_render::{lay_out_report, write_document, RenderError, ReportFont};

/// Stub that registers plain Helvetica instead of an embedded TTF.
///
/// Structurally valid for round-trip tests without a font file on disk;
/// glyph fidelity does not matter here.
struct HelveticaStub;

impl ReportFont for HelveticaStub {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn encode_text(&self, text: &str) -> String {
        text.bytes().map(|b| format!("{b:02X}")).collect()
    }

    fn add_to_document(&self, doc: &mut Document) -> Result<ObjectId, RenderError> {
        Ok(doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ])))
    }
}

fn rows(classrooms: &[&str]) -> Vec<MergedRow> {
    classrooms
        .iter()
        .enumerate()
        .map(|(i, c)| MergedRow {
            serial: i as u32 + 1,
            course: "علوم".to_string(),
            name: format!("طالبة {i}"),
            total: 90.0,
            classroom: (*c).to_string(),
        })
        .collect()
}

#[test]
fn writes_a_loadable_single_page_document() {
    let pages = lay_out_report(&rows(&["1A", "1A", "2B"]), "تاريخ: 01/01/2026", &HelveticaStub);
    let bytes = write_document(&pages, &HelveticaStub).expect("write pdf");

    assert!(bytes.starts_with(b"%PDF-"));
    let doc = Document::load_mem(&bytes).expect("reload pdf");
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn page_break_produces_multi_page_document() {
    let pages = lay_out_report(&rows(&["1A"; 40]), "تاريخ: 01/01/2026", &HelveticaStub);
    let bytes = write_document(&pages, &HelveticaStub).expect("write pdf");

    let doc = Document::load_mem(&bytes).expect("reload pdf");
    assert_eq!(doc.get_pages().len() as usize, pages.len());
    assert!(doc.get_pages().len() >= 2);
}

#[test]
fn media_box_matches_fixed_page_size() {
    let pages = lay_out_report(&rows(&["1A"]), "تاريخ", &HelveticaStub);
    let bytes = write_document(&pages, &HelveticaStub).expect("write pdf");

    let doc = Document::load_mem(&bytes).expect("reload pdf");
    let (_, page_id) = doc.get_pages().into_iter().next().expect("one page");
    let page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .expect("page dict");
    let media_box = page
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("media box");
    let dims: Vec<i64> = media_box.iter().filter_map(|o| o.as_i64().ok()).collect();
    assert_eq!(dims, vec![0, 0, 595, 842]);
}

#[test]
fn embedding_failure_surfaces_as_error() {
    struct BrokenFont;
    impl ReportFont for BrokenFont {
        fn text_width(&self, _: &str, _: f32) -> f32 {
            0.0
        }
        fn encode_text(&self, _: &str) -> String {
            String::new()
        }
        fn add_to_document(&self, _: &mut Document) -> Result<ObjectId, RenderError> {
            Err(RenderError::Font("corrupt font".to_string()))
        }
    }

    let pages = lay_out_report(&rows(&["1A"]), "تاريخ", &BrokenFont);
    let err = write_document(&pages, &BrokenFont).expect_err("must fail");
    assert!(matches!(err, RenderError::Font(_)));
}
