//! Résumé field extraction
//!
//! Two strategies producing differently shaped records:
//! - [`KeywordExtractor`]: fixed headings delimit sections
//! - [`PatternExtractor`]: labelled lines plus question answering

pub mod contact;
pub mod keyword;
pub mod pattern;
pub mod patterns;
pub mod section;

pub use contact::{classify_contact_lines, header_name, ContactLines};
pub use keyword::{KeywordExtractor, KeywordField, KeywordLayout, SectionRule};
pub use pattern::{PatternExtractor, DEFAULT_OCR_DPI};
pub use patterns::{search_label, LabelField};
pub use section::{extract_section, section_lines};

use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Turns one PDF file into one record
pub trait ResumeExtractor {
    type Record: Serialize;

    fn extract(&self, path: &Path) -> Result<Self::Record>;
}
