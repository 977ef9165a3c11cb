//! Pattern/NLP strategy for free-form résumés

use super::patterns::{search_label, LabelField};
use super::ResumeExtractor;
use crate::error::Result;
use crate::ocr::OcrEngine;
use crate::pdf::{load_text_with_ocr_fallback, PdfBackend};
use crate::qa::{QueryTarget, QuestionAnswerer, SECTION_QUERIES};
use crate::record::{PatternContact, PatternResume};
use std::path::Path;

/// Default rasterization resolution for OCR
pub const DEFAULT_OCR_DPI: u32 = 200;

/// Extracts a [`PatternResume`] from labelled fields and model answers.
///
/// Collaborators are injected: the PDF backend, the OCR engine used when a
/// document has no text layer, and the question-answering model.
pub struct PatternExtractor<B, O, Q> {
    backend: B,
    ocr: O,
    answerer: Q,
    ocr_dpi: u32,
}

impl<B, O, Q> PatternExtractor<B, O, Q>
where
    B: PdfBackend,
    O: OcrEngine,
    Q: QuestionAnswerer,
{
    pub fn new(backend: B, ocr: O, answerer: Q) -> Self {
        Self {
            backend,
            ocr,
            answerer,
            ocr_dpi: DEFAULT_OCR_DPI,
        }
    }

    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.ocr_dpi = dpi;
        self
    }

    /// Build the record from already extracted text
    pub fn extract_from_text(&self, text: &str) -> PatternResume {
        let mut record = PatternResume {
            name: search_label(LabelField::Name, text),
            contact: PatternContact {
                email: search_label(LabelField::Email, text),
                phone: search_label(LabelField::Phone, text),
                address: search_label(LabelField::Address, text),
            },
            ..PatternResume::default()
        };

        for query in &SECTION_QUERIES {
            let Some(value) = query.ask(&self.answerer, text) else {
                continue;
            };
            match query.target {
                QueryTarget::ProfessionalProfile => record.professional_profile = value,
                QueryTarget::Experience => record.experience.push(value),
                QueryTarget::Education => record.education.push(value),
                QueryTarget::References => record.references.push(value),
            }
        }

        record
    }
}

impl<B, O, Q> ResumeExtractor for PatternExtractor<B, O, Q>
where
    B: PdfBackend,
    O: OcrEngine,
    Q: QuestionAnswerer,
{
    type Record = PatternResume;

    fn extract(&self, path: &Path) -> Result<PatternResume> {
        let text = load_text_with_ocr_fallback(&self.backend, &self.ocr, path, self.ocr_dpi)?;
        Ok(self.extract_from_text(&text))
    }
}
