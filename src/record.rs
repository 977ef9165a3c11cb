//! Résumé records produced by the two extraction strategies
//!
//! The keyword and pattern strategies produce differently shaped records and
//! are kept as separate types. JSON keys keep the Spanish labels of the
//! documents being processed; field order matches declaration order.

use serde::{Deserialize, Serialize};

/// Contact block of the keyword strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordContact {
    #[serde(rename = "Correo")]
    pub email: String,
    #[serde(rename = "Teléfono")]
    pub phone: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
}

/// Record produced by the keyword-section strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordResume {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Contacto")]
    pub contact: KeywordContact,
    #[serde(rename = "Perfil Profesional")]
    pub professional_profile: String,
    #[serde(rename = "Experiencia Profesional")]
    pub experience: Vec<String>,
    #[serde(rename = "Educación")]
    pub education: Vec<String>,
    #[serde(rename = "Idiomas")]
    pub languages: Vec<String>,
    #[serde(rename = "Habilidades")]
    pub skills: Vec<String>,
    #[serde(rename = "Intereses")]
    pub interests: Vec<String>,
}

/// Contact block of the pattern strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternContact {
    #[serde(rename = "Correo")]
    pub email: String,
    #[serde(rename = "Teléfono")]
    pub phone: String,
    #[serde(rename = "Dirección")]
    pub address: String,
}

/// Record produced by the pattern/NLP strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternResume {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Contacto")]
    pub contact: PatternContact,
    #[serde(rename = "Perfil Profesional")]
    pub professional_profile: String,
    #[serde(rename = "Experiencia Profesional")]
    pub experience: Vec<String>,
    #[serde(rename = "Educación")]
    pub education: Vec<String>,
    #[serde(rename = "Referencias")]
    pub references: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_object()
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_default_keyword_record_has_every_key() {
        let value = serde_json::to_value(KeywordResume::default()).unwrap();
        let mut found = keys(&value);
        found.sort();
        let mut expected = vec![
            "Nombre",
            "Contacto",
            "Perfil Profesional",
            "Experiencia Profesional",
            "Educación",
            "Idiomas",
            "Habilidades",
            "Intereses",
        ];
        expected.sort();
        assert_eq!(found, expected);

        assert_eq!(value["Nombre"], Value::String(String::new()));
        assert_eq!(value["Idiomas"], Value::Array(vec![]));
        assert_eq!(value["Contacto"]["LinkedIn"], Value::String(String::new()));
    }

    #[test]
    fn test_default_pattern_record_has_every_key() {
        let value = serde_json::to_value(PatternResume::default()).unwrap();
        assert_eq!(value["Referencias"], Value::Array(vec![]));
        assert_eq!(value["Contacto"]["Dirección"], Value::String(String::new()));
        assert!(value.get("Intereses").is_none());
    }

    #[test]
    fn test_keyword_record_round_trip() {
        let record = KeywordResume {
            name: "MARÍA PÉREZ".to_string(),
            contact: KeywordContact {
                email: "maria@example.com".to_string(),
                phone: "+34 600 000 000".to_string(),
                linkedin: "linkedin.com/in/maria".to_string(),
            },
            professional_profile: "Ingeniera de datos".to_string(),
            experience: vec!["ACME 2019-2023".to_string(), String::new()],
            education: vec!["Grado en Informática".to_string()],
            languages: vec!["Español".to_string(), "Inglés".to_string()],
            skills: vec!["Rust".to_string()],
            interests: vec![],
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: KeywordResume = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_pattern_record_round_trip_keeps_list_shape() {
        let record = PatternResume {
            name: "JUAN GÓMEZ".to_string(),
            references: vec!["Ana Ruiz, ACME".to_string()],
            ..PatternResume::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["Referencias"].is_array());
        assert!(value["Experiencia Profesional"].is_array());
        assert!(value["Perfil Profesional"].is_string());

        let parsed: PatternResume = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_keys_deserialize_to_defaults() {
        let parsed: PatternResume = serde_json::from_str(r#"{"Nombre": "Ana"}"#).unwrap();
        assert_eq!(parsed.name, "Ana");
        assert_eq!(parsed.contact, PatternContact::default());
        assert!(parsed.references.is_empty());
    }
}
