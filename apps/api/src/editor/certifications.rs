//! Certifications are edited one per line.

use serde_json::Value;

/// Splits multiline input (`\n` or `\r\n`) into trimmed, non-empty lines.
pub fn parse_certifications(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn format_certifications(certifications: &[String]) -> String {
    certifications.join("\n")
}

/// Coerces a persisted value into a clean certifications list.
///
/// Repeats are kept: the same certification can legitimately be listed twice
/// (e.g. renewed under a different year).
pub fn normalize_certifications(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect(),
        Value::String(text) => parse_certifications(text),
        _ => Vec::new(),
    }
}

pub fn normalize_certification_list(certifications: &[String]) -> Vec<String> {
    certifications
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_handles_crlf_and_blank_lines() {
        assert_eq!(
            parse_certifications("AWS SAA\r\n\r\n  CKA  \nPMP\n"),
            strings(&["AWS SAA", "CKA", "PMP"])
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_certifications("PMP\nPMP"), strings(&["PMP", "PMP"]));
    }

    #[test]
    fn test_format_joins_with_newline() {
        assert_eq!(format_certifications(&strings(&["A", "B"])), "A\nB");
    }

    #[test]
    fn test_normalize_array_trims_and_drops_blanks() {
        assert_eq!(
            normalize_certifications(&json!([" CKA ", "", "   ", 3, "CKA"])),
            strings(&["CKA", "CKA"])
        );
    }

    #[test]
    fn test_normalize_legacy_string() {
        assert_eq!(
            normalize_certifications(&json!("AWS\r\nGCP\n")),
            strings(&["AWS", "GCP"])
        );
    }

    #[test]
    fn test_normalize_other_shapes_are_empty() {
        assert!(normalize_certifications(&json!(null)).is_empty());
        assert!(normalize_certifications(&json!(false)).is_empty());
        assert!(normalize_certifications(&json!({"a": "b"})).is_empty());
    }

    #[test]
    fn test_normalize_list_matches_value_path() {
        let raw = strings(&["  A", "", "B  "]);
        assert_eq!(normalize_certification_list(&raw), strings(&["A", "B"]));
    }

    proptest! {
        #[test]
        fn parse_inverts_format(certs in prop::collection::vec("[A-Za-z0-9 ()-]{0,20}", 0..8)) {
            let clean: Vec<String> = certs
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            prop_assert_eq!(parse_certifications(&format_certifications(&clean)), clean.clone());

            let text = format_certifications(&clean);
            prop_assert_eq!(format_certifications(&parse_certifications(&text)), text);
        }
    }
}
