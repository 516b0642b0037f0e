//! Store state and its transitions.
//!
//! Every transition takes the current state by reference and returns the next
//! one. Out-of-range indices and impossible moves return an unchanged copy.

use serde::{Deserialize, Serialize};

use crate::editor::certifications::normalize_certification_list;
use crate::editor::skills::normalize_skill_list;
use crate::models::preferences::{default_section_order, ResumeFont, SectionId, TemplateCategory};
use crate::models::resume::{
    EducationEntry, EducationPatch, ExperienceEntry, ExperiencePatch, Links, PersonalInfoPatch,
    ProjectEntry, ProjectPatch, ResumeData,
};
use crate::store::section_order::{moved_down, moved_up};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub selected_template_id: Option<String>,
    pub selected_category: Option<TemplateCategory>,
    pub draft_resume_data: ResumeData,
    pub resume_font: ResumeFont,
    pub section_order: Vec<SectionId>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            selected_template_id: None,
            selected_category: None,
            draft_resume_data: ResumeData::default(),
            resume_font: ResumeFont::default(),
            section_order: default_section_order(),
        }
    }
}

impl StoreState {
    fn with_resume(&self, edit: impl FnOnce(&mut ResumeData)) -> Self {
        let mut next = self.clone();
        edit(&mut next.draft_resume_data);
        next
    }

    // ── Preferences ──────────────────────────────────────────────────────

    pub fn set_selected_template(&self, template_id: &str, category: TemplateCategory) -> Self {
        Self {
            selected_template_id: Some(template_id.to_string()),
            selected_category: Some(category),
            ..self.clone()
        }
    }

    pub fn set_resume_font(&self, font: ResumeFont) -> Self {
        Self {
            resume_font: font,
            ..self.clone()
        }
    }

    pub fn move_section_up(&self, id: SectionId) -> Self {
        match moved_up(&self.section_order, id) {
            Some(section_order) => Self {
                section_order,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    pub fn move_section_down(&self, id: SectionId) -> Self {
        match moved_down(&self.section_order, id) {
            Some(section_order) => Self {
                section_order,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    // ── Scalar fields ────────────────────────────────────────────────────

    pub fn update_personal_info(&self, patch: &PersonalInfoPatch) -> Self {
        self.with_resume(|r| r.personal_info = r.personal_info.merged(patch))
    }

    pub fn update_headline(&self, headline: &str) -> Self {
        self.with_resume(|r| r.headline = headline.to_string())
    }

    pub fn update_summary(&self, summary: &str) -> Self {
        self.with_resume(|r| r.summary = summary.to_string())
    }

    pub fn update_links(&self, links: Links) -> Self {
        self.with_resume(|r| r.links = links)
    }

    pub fn update_skills(&self, skills: &[String]) -> Self {
        self.with_resume(|r| r.skills = normalize_skill_list(skills))
    }

    pub fn update_certifications(&self, certifications: &[String]) -> Self {
        self.with_resume(|r| r.certifications = normalize_certification_list(certifications))
    }

    // ── Experience ───────────────────────────────────────────────────────

    pub fn add_experience(&self) -> Self {
        self.with_resume(|r| r.experience.push(ExperienceEntry::blank()))
    }

    pub fn update_experience(&self, index: usize, patch: &ExperiencePatch) -> Self {
        self.with_resume(|r| {
            if let Some(entry) = r.experience.get_mut(index) {
                *entry = entry.merged(patch);
            }
        })
    }

    pub fn remove_experience(&self, index: usize) -> Self {
        self.with_resume(|r| remove_at(&mut r.experience, index))
    }

    /// Moves the entry at `from` to position `to`, shifting the ones between.
    pub fn reorder_experience(&self, from: usize, to: usize) -> Self {
        self.with_resume(|r| {
            let len = r.experience.len();
            if from < len && to < len {
                let entry = r.experience.remove(from);
                r.experience.insert(to, entry);
            }
        })
    }

    // ── Education ────────────────────────────────────────────────────────

    pub fn add_education(&self) -> Self {
        self.with_resume(|r| r.education.push(EducationEntry::blank()))
    }

    pub fn update_education(&self, index: usize, patch: &EducationPatch) -> Self {
        self.with_resume(|r| {
            if let Some(entry) = r.education.get_mut(index) {
                *entry = entry.merged(patch);
            }
        })
    }

    pub fn remove_education(&self, index: usize) -> Self {
        self.with_resume(|r| remove_at(&mut r.education, index))
    }

    // ── Projects ─────────────────────────────────────────────────────────

    pub fn add_project(&self) -> Self {
        self.with_resume(|r| r.projects.push(ProjectEntry::blank()))
    }

    pub fn update_project(&self, index: usize, patch: &ProjectPatch) -> Self {
        self.with_resume(|r| {
            if let Some(entry) = r.projects.get_mut(index) {
                *entry = entry.merged(patch);
            }
        })
    }

    pub fn remove_project(&self, index: usize) -> Self {
        self.with_resume(|r| remove_at(&mut r.projects, index))
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}
