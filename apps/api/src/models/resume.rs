use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub bullets: Vec<String>,
}

/// Education entries carry exactly these five fields. Legacy records with a
/// `gpa` key lose it on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The resume document being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub headline: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
    pub links: Links,
}

impl ExperienceEntry {
    /// A freshly added entry starts with one empty bullet for the editor to fill.
    pub fn blank() -> Self {
        Self {
            bullets: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn merged(&self, patch: &ExperiencePatch) -> Self {
        let mut next = self.clone();
        merge_field(&mut next.company, &patch.company);
        merge_field(&mut next.position, &patch.position);
        merge_field(&mut next.location, &patch.location);
        merge_field(&mut next.start_date, &patch.start_date);
        merge_field(&mut next.end_date, &patch.end_date);
        merge_field(&mut next.current, &patch.current);
        merge_field(&mut next.bullets, &patch.bullets);
        next
    }
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn merged(&self, patch: &EducationPatch) -> Self {
        let mut next = self.clone();
        merge_field(&mut next.institution, &patch.institution);
        merge_field(&mut next.degree, &patch.degree);
        merge_field(&mut next.field, &patch.field);
        merge_field(&mut next.location, &patch.location);
        merge_field(&mut next.graduation_date, &patch.graduation_date);
        next
    }
}

impl ProjectEntry {
    pub fn blank() -> Self {
        Self {
            link: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn merged(&self, patch: &ProjectPatch) -> Self {
        let mut next = self.clone();
        merge_field(&mut next.name, &patch.name);
        merge_field(&mut next.description, &patch.description);
        merge_field(&mut next.technologies, &patch.technologies);
        if patch.link.is_some() {
            next.link = patch.link.clone();
        }
        next
    }
}

impl PersonalInfo {
    pub fn merged(&self, patch: &PersonalInfoPatch) -> Self {
        let mut next = self.clone();
        merge_field(&mut next.full_name, &patch.full_name);
        merge_field(&mut next.email, &patch.email);
        merge_field(&mut next.phone, &patch.phone);
        merge_field(&mut next.location, &patch.location);
        next
    }
}

fn merge_field<T: Clone>(target: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}

// Partial updates. Absent fields leave the stored value untouched.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub graduation_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
}
