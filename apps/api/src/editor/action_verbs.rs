//! Strong action verbs for experience bullets.

pub const ACTION_VERBS: &[&str] = &[
    "Spearheaded",
    "Optimized",
    "Architected",
    "Implemented",
    "Developed",
    "Designed",
    "Led",
    "Managed",
    "Coordinated",
    "Executed",
    "Achieved",
    "Improved",
    "Increased",
    "Reduced",
    "Streamlined",
    "Established",
    "Created",
    "Built",
    "Launched",
    "Delivered",
    "Collaborated",
    "Facilitated",
    "Analyzed",
    "Researched",
    "Evaluated",
    "Resolved",
    "Transformed",
    "Pioneered",
    "Accelerated",
    "Drove",
];

/// Openers that read as passive. Matched case-insensitively.
const WEAK_PHRASES: &[&str] = &[
    "worked on",
    "responsible for",
    "helped with",
    "assisted in",
    "was involved in",
    "participated in",
    "contributed to",
];

/// Rewrites the start of a bullet around `verb`.
///
/// 1. A weak opener ("worked on", "responsible for", ...) is replaced by the verb.
/// 2. A first word that is already capitalized is assumed to be a verb and swapped.
/// 3. Otherwise the verb is prepended.
pub fn apply_action_verb(text: &str, verb: &str) -> String {
    if text.is_empty() {
        return verb.to_string();
    }

    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    for phrase in WEAK_PHRASES {
        // Weak phrases are ASCII, so the byte length is also a char boundary in `trimmed`.
        if lower.starts_with(phrase) && trimmed.is_char_boundary(phrase.len()) {
            return format!("{verb}{}", &trimmed[phrase.len()..]);
        }
    }

    if let Some(first_word) = trimmed.split_whitespace().next() {
        if starts_uppercase_invariant(first_word) {
            return format!("{verb}{}", &trimmed[first_word.len()..]);
        }
    }

    format!("{verb} {trimmed}")
}

/// True when the first character is unchanged by uppercasing: capital letters,
/// digits and punctuation all count.
fn starts_uppercase_invariant(word: &str) -> bool {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().eq(std::iter::once(c)))
        .unwrap_or(false)
}
