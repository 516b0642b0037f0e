//! Skills travel as a comma-separated text field in the editor and as a list in
//! the document.

use serde_json::Value;

/// Splits comma-separated input into trimmed, non-empty skills.
/// Order and duplicates are preserved.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Canonical text form used to refill the editor field.
pub fn format_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Coerces a persisted value of any shape into a clean skills list.
///
/// - Array: string items are split on commas (legacy records stored
///   `"JavaScript, React"` as one item), non-strings dropped, then de-duplicated
///   keeping the first occurrence.
/// - String: parsed as editor text, then de-duplicated so the stored list
///   stays unique like every other normalized skills list.
/// - Anything else: empty.
pub fn normalize_skills(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => dedup_preserving_order(
            items
                .iter()
                .filter_map(Value::as_str)
                .flat_map(parse_skills),
        ),
        Value::String(text) => dedup_preserving_order(parse_skills(text)),
        _ => Vec::new(),
    }
}

/// Typed entry point for store updates.
pub fn normalize_skill_list(skills: &[String]) -> Vec<String> {
    dedup_preserving_order(skills.iter().flat_map(|s| parse_skills(s)))
}

fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
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
    fn test_parse_trims_and_drops_empties() {
        assert_eq!(
            parse_skills(" Rust ,  , Go,,SQL , "),
            strings(&["Rust", "Go", "SQL"])
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_skills("a, a, b"), strings(&["a", "a", "b"]));
    }

    #[test]
    fn test_parse_blank_input_is_empty() {
        assert!(parse_skills("   ").is_empty());
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn test_format_joins_with_comma_space() {
        assert_eq!(format_skills(&strings(&["Rust", "Go"])), "Rust, Go");
        assert_eq!(format_skills(&[]), "");
    }

    #[test]
    fn test_normalize_flattens_legacy_blobs() {
        assert_eq!(
            normalize_skills(&json!(["a, b", "c"])),
            strings(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_normalize_dedups_keeping_first() {
        assert_eq!(normalize_skills(&json!(["a", "a", "b"])), strings(&["a", "b"]));
        assert_eq!(
            normalize_skills(&json!(["b, a", "a", "b", "c"])),
            strings(&["b", "a", "c"])
        );
    }

    #[test]
    fn test_normalize_drops_non_strings_and_blanks() {
        assert_eq!(
            normalize_skills(&json!(["Rust", 42, null, "  ", {"x": 1}, "Go"])),
            strings(&["Rust", "Go"])
        );
    }

    #[test]
    fn test_normalize_string_shape() {
        assert_eq!(
            normalize_skills(&json!("JavaScript, React, JavaScript")),
            strings(&["JavaScript", "React"])
        );
    }

    #[test]
    fn test_normalize_other_shapes_are_empty() {
        assert!(normalize_skills(&json!(null)).is_empty());
        assert!(normalize_skills(&json!(7)).is_empty());
        assert!(normalize_skills(&json!({"skills": ["a"]})).is_empty());
    }

    #[test]
    fn test_normalize_skill_list_matches_value_path() {
        let raw = strings(&["a, b", " c ", "a", ""]);
        assert_eq!(
            normalize_skill_list(&raw),
            normalize_skills(&serde_json::to_value(&raw).unwrap())
        );
    }

    proptest! {
        #[test]
        fn parse_inverts_format(skills in prop::collection::vec("[A-Za-z0-9+#./ ]{0,12}", 0..8)) {
            let clean: Vec<String> = skills
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            prop_assert_eq!(parse_skills(&format_skills(&clean)), clean);
        }
    }
}
