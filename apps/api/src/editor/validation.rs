use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ResumeData;

/// Field name → human-readable message. Empty means the resume passes.
pub type ValidationErrors = IndexMap<String, String>;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Advisory submit-time checks. Never blocks a mutation.
///
/// Checks:
/// - `fullName` is not blank
/// - `email` is not blank and looks like `local@domain.tld`
/// - at least one of email / phone is present (`contact`)
/// - `headline` is not blank
pub fn validate_resume_data(data: &ResumeData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let info = &data.personal_info;

    if info.full_name.trim().is_empty() {
        errors.insert("fullName".to_string(), "Full name is required".to_string());
    }

    if info.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !EMAIL_RE.is_match(&info.email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    if info.phone.trim().is_empty() && info.email.trim().is_empty() {
        errors.insert(
            "contact".to_string(),
            "At least one contact method (email or phone) is required".to_string(),
        );
    }

    if data.headline.trim().is_empty() {
        errors.insert(
            "headline".to_string(),
            "Professional headline is required".to_string(),
        );
    }

    errors
}
