//! Fixed-keyword section slicing

/// Slice the text between two section headings.
///
/// Returns the trimmed text after the first occurrence of `start_keyword`
/// and before the first occurrence of `end_keyword`. Both searches start at
/// the beginning of the document, so a repeated heading (for example a
/// bilingual résumé) truncates or empties the section.
///
/// - `start_keyword` absent: `""`
/// - `end_keyword` empty or absent: the section runs to the end of the text
/// - `end_keyword` first found before the start heading ends: `""`
pub fn extract_section(text: &str, start_keyword: &str, end_keyword: &str) -> String {
    let Some(start) = text.find(start_keyword) else {
        return String::new();
    };
    let start = start + start_keyword.len();

    let end = if end_keyword.is_empty() {
        text.len()
    } else {
        text.find(end_keyword).unwrap_or(text.len())
    };

    if end < start {
        return String::new();
    }

    text[start..end].trim().to_string()
}

/// Split a section into lines. Blank lines are kept as empty strings.
pub fn section_lines(section: &str) -> Vec<String> {
    section.split('\n').map(str::to_string).collect()
}
