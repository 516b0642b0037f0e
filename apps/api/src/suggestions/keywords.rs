//! Keyword suggestions from a curated phrase table. No ranking beyond table order.

pub const MAX_SUGGESTIONS: usize = 8;
const MIN_INPUT_CHARS: usize = 3;

/// Domain phrase → keywords worth mentioning. Iteration order is the
/// suggestion order.
const KEYWORD_MAPPINGS: &[(&str, &[&str])] = &[
    (
        "digital marketing",
        &["SEO", "SEM", "ROAS", "PPC", "Content Marketing", "Social Media Marketing", "Email Marketing", "Analytics"],
    ),
    (
        "software engineer",
        &["JavaScript", "Python", "React", "Node.js", "API", "Database", "Git", "Agile"],
    ),
    (
        "data science",
        &["Python", "Machine Learning", "SQL", "Statistics", "Data Visualization", "TensorFlow", "Pandas", "NumPy"],
    ),
    (
        "project management",
        &["Agile", "Scrum", "Stakeholder Management", "Risk Management", "Budget Planning", "JIRA", "Gantt Charts"],
    ),
    (
        "sales",
        &["Lead Generation", "CRM", "Negotiation", "Pipeline Management", "Salesforce", "B2B", "B2C", "Account Management"],
    ),
    (
        "marketing",
        &["Brand Strategy", "Campaign Management", "Market Research", "Content Creation", "Analytics", "Social Media"],
    ),
    (
        "web development",
        &["HTML", "CSS", "JavaScript", "React", "Vue", "Angular", "Responsive Design", "REST API"],
    ),
    (
        "frontend",
        &["React", "Vue", "Angular", "TypeScript", "CSS", "HTML", "Responsive Design", "UI/UX"],
    ),
    (
        "backend",
        &["Node.js", "Python", "Java", "SQL", "MongoDB", "REST API", "GraphQL", "Microservices"],
    ),
    (
        "devops",
        &["Docker", "Kubernetes", "CI/CD", "AWS", "Azure", "Jenkins", "Terraform", "Monitoring"],
    ),
    (
        "design",
        &["Figma", "Adobe XD", "Sketch", "Prototyping", "User Research", "Wireframing", "UI/UX", "Design Systems"],
    ),
    (
        "finance",
        &["Financial Analysis", "Budgeting", "Forecasting", "Excel", "Financial Modeling", "Reporting", "Compliance"],
    ),
    (
        "hr",
        &["Recruitment", "Onboarding", "Performance Management", "Employee Relations", "HRIS", "Training", "Compliance"],
    ),
    (
        "customer service",
        &["Communication", "Problem Solving", "CRM", "Zendesk", "Customer Satisfaction", "Conflict Resolution"],
    ),
];

/// Suggests up to eight keywords for a role or domain phrase.
///
/// An exact phrase match contributes first, then every phrase that contains
/// the input or is contained by it, in table order. Inputs shorter than three
/// characters, or blank after trimming, suggest nothing.
pub fn get_suggestions(input: &str) -> Vec<String> {
    if input.chars().count() < MIN_INPUT_CHARS {
        return Vec::new();
    }
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let exact = KEYWORD_MAPPINGS
        .iter()
        .filter(|(key, _)| *key == needle)
        .flat_map(|(_, keywords)| keywords.iter());
    let partial = KEYWORD_MAPPINGS
        .iter()
        .filter(|(key, _)| key.contains(needle.as_str()) || needle.contains(key))
        .flat_map(|(_, keywords)| keywords.iter());

    let mut suggestions: Vec<String> = Vec::new();
    for keyword in exact.chain(partial) {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.iter().any(|s| s.as_str() == *keyword) {
            suggestions.push(keyword.to_string());
        }
    }
    suggestions
}

/// Inserts `keyword` into `text`.
///
/// With a cursor (a character offset, clamped to the text length) the keyword
/// is spliced in verbatim. Without one it is appended to the trimmed text,
/// separated by `", "`, or by a single space when the text already ends in a
/// comma.
pub fn insert_keyword(text: &str, keyword: &str, cursor: Option<usize>) -> String {
    if text.is_empty() {
        return keyword.to_string();
    }

    if let Some(cursor) = cursor {
        let split_at = text
            .char_indices()
            .nth(cursor)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len());
        let (before, after) = text.split_at(split_at);
        return format!("{before}{keyword}{after}");
    }

    let trimmed = text.trim();
    let separator = if trimmed.ends_with(',') { " " } else { ", " };
    format!("{trimmed}{separator}{keyword}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_is_empty() {
        assert!(get_suggestions("ab").is_empty());
        assert!(get_suggestions("").is_empty());
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(get_suggestions("     ").is_empty());
    }

    #[test]
    fn test_frontend_includes_react() {
        let suggestions = get_suggestions("frontend");
        assert!(suggestions.contains(&"React".to_string()));
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        assert_eq!(get_suggestions("  DevOps "), get_suggestions("devops"));
        assert_eq!(get_suggestions("devops")[0], "Docker");
    }

    #[test]
    fn test_input_containing_key_matches() {
        // "senior backend developer" contains "backend"
        let suggestions = get_suggestions("senior backend developer");
        assert!(suggestions.contains(&"GraphQL".to_string()));
    }

    #[test]
    fn test_key_containing_input_matches_several_entries() {
        // "market" is inside "digital marketing" and "marketing"
        let suggestions = get_suggestions("market");
        assert_eq!(suggestions[0], "SEO");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_results_are_unique_and_capped() {
        // "dev" is inside both "web development" and "devops"
        let suggestions = get_suggestions("dev");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        let mut unique = suggestions.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_exact_match_comes_first() {
        // "sales" is an exact key; its keywords lead
        assert_eq!(get_suggestions("sales")[0], "Lead Generation");
    }

    #[test]
    fn test_unknown_phrase_is_empty() {
        assert!(get_suggestions("astronaut").is_empty());
    }

    #[test]
    fn test_insert_into_empty_text() {
        assert_eq!(insert_keyword("", "SEO", None), "SEO");
        assert_eq!(insert_keyword("", "SEO", Some(4)), "SEO");
    }

    #[test]
    fn test_insert_appends_with_comma() {
        assert_eq!(insert_keyword("Led campaigns  ", "SEO", None), "Led campaigns, SEO");
    }

    #[test]
    fn test_insert_after_trailing_comma_uses_space() {
        assert_eq!(insert_keyword("SEM, PPC, ", "SEO", None), "SEM, PPC, SEO");
    }

    #[test]
    fn test_insert_at_cursor() {
        assert_eq!(insert_keyword("I know  well", "Rust", Some(7)), "I know Rust well");
        assert_eq!(insert_keyword("abc", "X", Some(0)), "Xabc");
    }

    #[test]
    fn test_insert_cursor_past_end_appends_verbatim() {
        assert_eq!(insert_keyword("abc ", "X", Some(99)), "abc X");
    }

    #[test]
    fn test_insert_cursor_counts_characters() {
        assert_eq!(insert_keyword("héllo", "-", Some(2)), "hé-llo");
    }
}
