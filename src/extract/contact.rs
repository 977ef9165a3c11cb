//! Line-based heuristics for the document header and contact details

/// Contact lines found by [`classify_contact_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactLines {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// Classify every line of the document into contact categories.
///
/// A line containing `@` is an email, one containing `linkedin` (any case) is
/// a profile link, and one containing `+` is a phone number. Each test runs
/// independently, so one line can fill several categories. Within a category
/// the last matching line wins; earlier matches are overwritten, not
/// accumulated.
pub fn classify_contact_lines(text: &str) -> ContactLines {
    let mut contact = ContactLines::default();

    for line in text.lines() {
        let value = line.trim();
        if line.contains('@') {
            contact.email = value.to_string();
        }
        if line.to_lowercase().contains("linkedin") {
            contact.linkedin = value.to_string();
        }
        if line.contains('+') {
            contact.phone = value.to_string();
        }
    }

    contact
}

/// The first non-empty line of the document, trimmed.
///
/// Résumés in the fixed layout open with the applicant's name; nothing checks
/// that the line actually looks like one.
pub fn header_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn expected_alice() -> ContactLines {
        ContactLines {
            email: "alice@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            linkedin: "linkedin.com/in/alice".to_string(),
        }
    }

    #[rstest]
    #[case("alice@example.com\n+1 555 0100\nlinkedin.com/in/alice")]
    #[case("linkedin.com/in/alice\nalice@example.com\n+1 555 0100")]
    #[case("+1 555 0100\nlinkedin.com/in/alice\nalice@example.com")]
    fn test_contact_lines_any_order(#[case] text: &str) {
        assert_eq!(classify_contact_lines(text), expected_alice());
    }

    #[test]
    fn test_last_matching_line_wins() {
        let text = "old@example.com\nALICE\nnew@example.com\n";
        assert_eq!(classify_contact_lines(text).email, "new@example.com");
    }

    #[test]
    fn test_one_line_can_fill_several_categories() {
        let contact = classify_contact_lines("  bob@mail.com | +44 20 7946 0000  ");
        assert_eq!(contact.email, "bob@mail.com | +44 20 7946 0000");
        assert_eq!(contact.phone, "bob@mail.com | +44 20 7946 0000");
        assert_eq!(contact.linkedin, "");
    }

    #[test]
    fn test_linkedin_is_case_insensitive() {
        let contact = classify_contact_lines("LinkedIn: /in/carla");
        assert_eq!(contact.linkedin, "LinkedIn: /in/carla");
    }

    #[test]
    fn test_no_contact_lines() {
        assert_eq!(classify_contact_lines(""), ContactLines::default());
    }

    #[rstest]
    #[case("JOHN DOE\nADDRESS...\n", "JOHN DOE")]
    #[case("\n\n   JANE ROE  \nDEV\n", "JANE ROE")]
    #[case("PERFIL PROFESIONAL\n", "PERFIL PROFESIONAL")]
    #[case("", "")]
    #[case("  \n\t\n", "")]
    fn test_header_name(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(header_name(text), expected);
    }
}
