//! Keyword-section strategy for résumés in a fixed layout

use super::contact::{classify_contact_lines, header_name};
use super::section::{extract_section, section_lines};
use super::ResumeExtractor;
use crate::error::Result;
use crate::pdf::{load_text, PdfBackend};
use crate::record::{KeywordContact, KeywordResume};
use std::path::Path;

/// Record field filled by a [`SectionRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordField {
    ProfessionalProfile,
    Experience,
    Education,
    Languages,
    Skills,
    Interests,
}

/// Slice `start..end` into `field`, but only when `gate` appears in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRule {
    pub field: KeywordField,
    pub gate: String,
    pub start: String,
    /// Empty means "to the end of the document"
    pub end: String,
}

impl SectionRule {
    fn new(field: KeywordField, gate: &str, start: &str, end: &str) -> Self {
        Self {
            field,
            gate: gate.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Ordered section rules of a résumé layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLayout {
    pub rules: Vec<SectionRule>,
}

impl Default for KeywordLayout {
    /// The Spanish layout: profile, experience, education, languages,
    /// skills, interests. The profile is only read from documents carrying a
    /// "DATOS PERSONALES" block.
    fn default() -> Self {
        use KeywordField::*;
        Self {
            rules: vec![
                SectionRule::new(
                    ProfessionalProfile,
                    "DATOS PERSONALES",
                    "PERFIL PROFESIONAL",
                    "IDIOMAS",
                ),
                SectionRule::new(
                    Experience,
                    "EXPERIENCIA PROFESIONAL",
                    "EXPERIENCIA PROFESIONAL",
                    "FORMACIÓN",
                ),
                SectionRule::new(Education, "FORMACIÓN", "FORMACIÓN", "IDIOMAS"),
                SectionRule::new(Languages, "IDIOMAS", "IDIOMAS", "HABILIDADES"),
                SectionRule::new(Skills, "HABILIDADES", "HABILIDADES", "INTERESES"),
                SectionRule::new(Interests, "INTERESES", "INTERESES", ""),
            ],
        }
    }
}

/// Extracts a [`KeywordResume`] by slicing between fixed headings.
///
/// Uses the direct text layer only; scanned documents come out empty.
pub struct KeywordExtractor<B> {
    backend: B,
    layout: KeywordLayout,
}

impl<B: PdfBackend> KeywordExtractor<B> {
    pub fn new(backend: B) -> Self {
        Self::with_layout(backend, KeywordLayout::default())
    }

    pub fn with_layout(backend: B, layout: KeywordLayout) -> Self {
        Self { backend, layout }
    }

    /// Build the record from already extracted text
    pub fn extract_from_text(&self, text: &str) -> KeywordResume {
        let contact = classify_contact_lines(text);
        let mut record = KeywordResume {
            name: header_name(text),
            contact: KeywordContact {
                email: contact.email,
                phone: contact.phone,
                linkedin: contact.linkedin,
            },
            ..KeywordResume::default()
        };

        for rule in &self.layout.rules {
            if !text.contains(rule.gate.as_str()) {
                continue;
            }

            let section = extract_section(text, &rule.start, &rule.end);
            match rule.field {
                KeywordField::ProfessionalProfile => record.professional_profile = section,
                KeywordField::Experience => record.experience = section_lines(&section),
                KeywordField::Education => record.education = section_lines(&section),
                KeywordField::Languages => record.languages = section_lines(&section),
                KeywordField::Skills => record.skills = section_lines(&section),
                KeywordField::Interests => record.interests = section_lines(&section),
            }
        }

        record
    }
}

impl<B: PdfBackend> ResumeExtractor for KeywordExtractor<B> {
    type Record = KeywordResume;

    fn extract(&self, path: &Path) -> Result<KeywordResume> {
        let text = load_text(&self.backend, path)?;
        Ok(self.extract_from_text(&text))
    }
}
