//! Label-anchored regex fields for free-form résumés

use once_cell::sync::Lazy;
use regex::Regex;

/// Fields read from a `LABEL: value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelField {
    Name,
    Phone,
    Email,
    Address,
}

static NAME_RE: Lazy<Regex> = Lazy::new(|| label_regex(r"NOMBRES Y APELLIDOS:?\s*(.*)"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| label_regex(r"TEL[ÉE]FONO:?\s*(.*)"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| label_regex(r"E-MAIL:?\s*(.*)"));
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| label_regex(r"DIRECCI[ÓO]N:?\s*(.*)"));

fn label_regex(pattern: &str) -> Regex {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("label patterns are valid")
}

impl LabelField {
    pub const ALL: [LabelField; 4] = [
        LabelField::Name,
        LabelField::Phone,
        LabelField::Email,
        LabelField::Address,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            LabelField::Name => &NAME_RE,
            LabelField::Phone => &PHONE_RE,
            LabelField::Email => &EMAIL_RE,
            LabelField::Address => &ADDRESS_RE,
        }
    }
}

/// Value following the field's label, or `""` when the label is missing.
///
/// Only the first match counts. `\s*` can cross a line break, so a label on a
/// line of its own captures the next line.
pub fn search_label(field: LabelField, text: &str) -> String {
    field
        .regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
