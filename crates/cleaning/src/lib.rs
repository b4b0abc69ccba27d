//! Upload cleaning: bilingual header resolution and Arabic name normalization
//!
//! Uploaded spreadsheets arrive as JSON row-objects whose header names vary
//! between Arabic and English spellings. This crate resolves those aliases
//! into typed records and builds the normalized comparison keys the merge
//! step joins on.

pub mod alias;
mod clean;
mod normalize;

pub use clean::{clean_marks, clean_students, parse_total};
pub use normalize::normalize_arabic;
