use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six resume sections the renderer knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl SectionId {
    /// Canonical order, also the default layout.
    pub const ALL: [SectionId; 6] = [
        SectionId::Summary,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
        }
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown section '{s}'"))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn default_section_order() -> Vec<SectionId> {
    SectionId::ALL.to_vec()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeFont {
    #[default]
    Arial,
    Calibri,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
}

impl ResumeFont {
    /// CSS `font-family` value.
    pub fn css_family(&self) -> &'static str {
        match self {
            ResumeFont::Arial => "Arial",
            ResumeFont::Calibri => "Calibri",
            ResumeFont::TimesNewRoman => "'Times New Roman'",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateCategory {
    #[serde(rename = "Reverse-Chronological")]
    ReverseChronological,
    #[serde(rename = "Functional (Skills-Based)")]
    Functional,
    #[serde(rename = "Hybrid (Combination)")]
    Hybrid,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 3] = [
        TemplateCategory::ReverseChronological,
        TemplateCategory::Functional,
        TemplateCategory::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::ReverseChronological => "Reverse-Chronological",
            TemplateCategory::Functional => "Functional (Skills-Based)",
            TemplateCategory::Hybrid => "Hybrid (Combination)",
        }
    }
}
