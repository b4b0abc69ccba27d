//! Font metrics and PDF font embedding.
//!
//! The report draws Arabic text with a TTF supplied at startup. The font is
//! embedded as a CID-keyed Type0 font with Identity-H encoding, so show-text
//! arguments are hex-encoded glyph ids rather than byte codes.

use std::path::Path;

use ab_glyph::{Font as _, FontVec, GlyphId};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::RenderError;

/// PDF name under which the embedded font is registered.
const BASE_FONT: &str = "ReportTTF";

/// Text services the renderer needs from a font.
///
/// The layout engine only measures; the writer additionally encodes
/// show-text arguments and registers the font resource on the document.
pub trait ReportFont {
    /// Width of `text` in page units at `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Hex show-text argument for a `Tj` operator.
    fn encode_text(&self, text: &str) -> String;

    /// Add the font to `doc`, returning the font dictionary id.
    fn add_to_document(&self, doc: &mut Document) -> Result<ObjectId, RenderError>;
}

/// A TTF loaded into memory.
pub struct EmbeddedFont {
    font: FontVec,
    data: Vec<u8>,
    units_per_em: f32,
}

impl EmbeddedFont {
    /// Parse raw TTF bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        let font = FontVec::try_from_vec(data.clone())
            .map_err(|e| RenderError::Font(format!("invalid font data: {e}")))?;
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| RenderError::Font("font has no units-per-em".to_string()))?;
        Ok(Self {
            font,
            data,
            units_per_em,
        })
    }

    /// Load a TTF from disk.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path).map_err(|e| {
            RenderError::Font(format!("cannot read font {}: {e}", path.display()))
        })?;
        Self::from_bytes(data)
    }

    /// Scale factor from font units to the 1000-unit glyph space PDF
    /// descriptor entries are expressed in.
    fn descriptor_scale(&self) -> f32 {
        1000.0 / self.units_per_em
    }
}

impl ReportFont for EmbeddedFont {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let scale = size / self.units_per_em;
        text.chars()
            .map(|c| self.font.h_advance_unscaled(self.font.glyph_id(c)) * scale)
            .sum()
    }

    fn encode_text(&self, text: &str) -> String {
        use std::fmt::Write;
        let mut hex = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            let GlyphId(id) = self.font.glyph_id(c);
            let _ = write!(hex, "{id:04X}");
        }
        hex
    }

    fn add_to_document(&self, doc: &mut Document) -> Result<ObjectId, RenderError> {
        let scale = self.descriptor_scale();
        let ascent = (self.font.ascent_unscaled() * scale).round() as i64;
        let descent = (self.font.descent_unscaled() * scale).round() as i64;

        let mut file_dict = Dictionary::new();
        file_dict.set("Length1", Object::Integer(self.data.len() as i64));
        let file_id = doc.add_object(Stream::new(file_dict, self.data.clone()));

        let descriptor_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"FontDescriptor".to_vec())),
            ("FontName", Object::Name(BASE_FONT.as_bytes().to_vec())),
            // Symbolic: the font carries glyphs outside standard Latin.
            ("Flags", Object::Integer(4)),
            (
                "FontBBox",
                Object::Array(vec![
                    Object::Integer(-1000),
                    Object::Integer(descent),
                    Object::Integer(2000),
                    Object::Integer(ascent),
                ]),
            ),
            ("ItalicAngle", Object::Integer(0)),
            ("Ascent", Object::Integer(ascent)),
            ("Descent", Object::Integer(descent)),
            ("CapHeight", Object::Integer(ascent)),
            ("StemV", Object::Integer(80)),
            ("FontFile2", Object::Reference(file_id)),
        ]));

        // Per-glyph widths for the whole glyph range, [0 [w0 w1 ...]].
        let widths: Vec<Object> = (0..self.font.glyph_count())
            .map(|gid| {
                let advance = self.font.h_advance_unscaled(GlyphId(gid as u16));
                Object::Integer((advance * scale).round() as i64)
            })
            .collect();

        let cid_font_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"CIDFontType2".to_vec())),
            ("BaseFont", Object::Name(BASE_FONT.as_bytes().to_vec())),
            (
                "CIDSystemInfo",
                Object::Dictionary(Dictionary::from_iter([
                    ("Registry", Object::string_literal("Adobe")),
                    ("Ordering", Object::string_literal("Identity")),
                    ("Supplement", Object::Integer(0)),
                ])),
            ),
            ("FontDescriptor", Object::Reference(descriptor_id)),
            ("DW", Object::Integer(1000)),
            (
                "W",
                Object::Array(vec![Object::Integer(0), Object::Array(widths)]),
            ),
            ("CIDToGIDMap", Object::Name(b"Identity".to_vec())),
        ]));

        let type0_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type0".to_vec())),
            ("BaseFont", Object::Name(BASE_FONT.as_bytes().to_vec())),
            ("Encoding", Object::Name(b"Identity-H".to_vec())),
            (
                "DescendantFonts",
                Object::Array(vec![Object::Reference(cid_font_id)]),
            ),
        ]));

        Ok(type0_id)
    }
}
