//! JSON output files

use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Serialize a record as JSON indented by four spaces.
///
/// Non-ASCII characters are written as-is, not as `\u` escapes.
pub fn to_pretty_json<T: Serialize>(record: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `<output_dir>/<pdf stem>.json`
pub fn output_path(output_dir: &Path, pdf_path: &Path) -> PathBuf {
    let stem = pdf_path.file_stem().unwrap_or(pdf_path.as_os_str());
    output_dir.join(format!("{}.json", stem.to_string_lossy()))
}

/// Write a record to `path` as UTF-8 JSON
pub fn write_record<T: Serialize>(record: &T, path: &Path) -> Result<()> {
    let json = to_pretty_json(record)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PatternContact, PatternResume};

    #[test]
    fn test_pretty_json_keeps_non_ascii_and_indents_four_spaces() {
        let record = PatternResume {
            name: "José Núñez".to_string(),
            contact: PatternContact {
                address: "Calle Ñandú 3".to_string(),
                ..PatternContact::default()
            },
            ..PatternResume::default()
        };

        let json = to_pretty_json(&record).unwrap();
        assert!(json.contains("\"Nombre\": \"José Núñez\""));
        assert!(json.contains("\"Dirección\": \"Calle Ñandú 3\""));
        assert!(json.contains("\n    \"Contacto\": {\n        \"Correo\": \"\""));
        assert!(!json.contains("\\u"));
        assert!(json.starts_with("{\n    \"Nombre\""));
    }

    #[test]
    fn test_output_path_swaps_extension() {
        assert_eq!(
            output_path(Path::new("output"), Path::new("data/cv_ana.pdf")),
            PathBuf::from("output/cv_ana.json")
        );
        assert_eq!(
            output_path(Path::new("out"), Path::new("data/v1.2.final.PDF")),
            PathBuf::from("out/v1.2.final.json")
        );
    }

    #[test]
    fn test_write_record_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        let record = PatternResume {
            name: "Ana".to_string(),
            education: vec!["Máster".to_string()],
            ..PatternResume::default()
        };

        write_record(&record, &path).unwrap();
        let parsed: PatternResume =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, record);
    }
}
