use crate::models::resume::ResumeData;
use crate::suggestions::keywords::MAX_SUGGESTIONS;

const GENERIC_HEADLINES: &[&str] = &[
    "Results-Driven Professional | Problem Solver",
    "Innovative Technologist | Team Leader",
    "Strategic Thinker | Technical Expert",
];

/// Skill substring → industry headline.
const INDUSTRY_HEADLINES: &[(&str, &str)] = &[
    ("data", "Data-Driven Analyst | Insights Specialist"),
    ("design", "Creative Designer | User Experience Advocate"),
    ("manage", "Project Manager | Agile Leader"),
];

/// Derives up to eight headline ideas from the resume.
///
/// Candidates are assembled role-first, then skill, seniority, generic and
/// industry phrases; duplicates are dropped and the first eight survive.
pub fn generate_headline_suggestions(resume: &ResumeData) -> Vec<String> {
    let skills: Vec<&str> = resume.skills.iter().take(3).map(String::as_str).collect();
    let top_skill = skills.first().copied();
    let mut candidates: Vec<String> = Vec::new();

    if let Some(position) = resume
        .experience
        .first()
        .map(|e| e.position.as_str())
        .filter(|p| !p.is_empty())
    {
        candidates.push(position.to_string());
        candidates.push(format!(
            "{position} | {} Specialist",
            top_skill.unwrap_or("Technology")
        ));
    }

    if let [first, second, ..] = skills.as_slice() {
        candidates.push(format!("{first} & {second} Expert"));
        candidates.push(format!("{first} Developer | {second} Enthusiast"));
    }

    if let (Some(level), Some(skill)) = (seniority(resume.experience.len()), top_skill) {
        candidates.push(format!("{level} {skill} Developer"));
    }

    candidates.extend(GENERIC_HEADLINES.iter().map(|h| h.to_string()));

    for (needle, headline) in INDUSTRY_HEADLINES {
        if skills.iter().any(|s| s.to_lowercase().contains(needle)) {
            candidates.push(headline.to_string());
        }
    }

    let mut suggestions: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for candidate in candidates {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.contains(&candidate) {
            suggestions.push(candidate);
        }
    }
    suggestions
}

/// Entry count stands in for years of experience.
fn seniority(entries: usize) -> Option<&'static str> {
    match entries {
        0 => None,
        1 => Some("Junior"),
        2..=4 => Some("Mid-Level"),
        _ => Some("Senior"),
    }
}
