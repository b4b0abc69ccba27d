//! lopdf document assembly from laid-out pages.

use lopdf::{Dictionary, Document, Object, Stream};
use tracing::debug;

use crate::font::ReportFont;
use crate::layout::{PageLayout, PAGE_HEIGHT, PAGE_WIDTH};
use crate::RenderError;

/// Serialize laid-out pages into a PDF binary.
pub fn write_document(pages: &[PageLayout], font: &dyn ReportFont) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let page_tree_id = doc.new_object_id();

    let font_id = font.add_to_document(&mut doc)?;
    let resources_id = doc.add_object(Dictionary::from_iter([(
        "Font",
        Object::Dictionary(Dictionary::from_iter([(
            "F1",
            Object::Reference(font_id),
        )])),
    )]));

    let mut kids = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, font);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(page_tree_id)),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Reference(resources_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(PAGE_WIDTH as i64),
                    Object::Integer(PAGE_HEIGHT as i64),
                ]),
            ),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let page_tree = Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_count)),
    ]);
    doc.objects.insert(page_tree_id, Object::Dictionary(page_tree));

    let catalog_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(page_tree_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| RenderError::Pdf(format!("failed to save PDF: {e}")))?;
    debug!(pages = pages.len(), bytes = output.len(), "serialized report document");
    Ok(output)
}

/// Build the content stream for one page: bordered grid first, text on top.
fn page_content(page: &PageLayout, font: &dyn ReportFont) -> String {
    use std::fmt::Write;

    let mut content = String::new();
    content.push_str("q\n1 w\n0 0 0 RG\n");

    for rect in &page.rects {
        if let Some([r, g, b]) = rect.fill {
            let _ = writeln!(content, "{r} {g} {b} rg");
            let _ = writeln!(
                content,
                "{} {} {} {} re B",
                rect.x, rect.y, rect.width, rect.height
            );
        } else {
            let _ = writeln!(
                content,
                "{} {} {} {} re S",
                rect.x, rect.y, rect.width, rect.height
            );
        }
    }

    content.push_str("0 0 0 rg\n");
    for text in &page.texts {
        content.push_str("BT\n");
        let _ = writeln!(content, "/F1 {} Tf", text.size);
        let _ = writeln!(content, "{} {} Td", text.x, text.y);
        let _ = writeln!(content, "<{}> Tj", font.encode_text(&text.text));
        content.push_str("ET\n");
    }

    content.push_str("Q\n");
    content
}
