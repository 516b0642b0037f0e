//! HTML rendering of the resume.
//!
//! Every template id currently resolves to the base layout; the catalog ids
//! only differ in the gallery. New layouts plug in through `ResumeRenderer`.

use std::fmt::Write;

use crate::editor::certifications::normalize_certification_list;
use crate::editor::skills::normalize_skill_list;
use crate::models::preferences::{ResumeFont, SectionId};
use crate::models::resume::ResumeData;

/// Everything a layout needs to draw a resume.
pub struct RenderInput<'a> {
    pub resume: &'a ResumeData,
    pub section_order: &'a [SectionId],
    pub font: ResumeFont,
}

pub trait ResumeRenderer: Send + Sync {
    fn render(&self, input: &RenderInput<'_>) -> String;
}

/// Single-column layout: header, then sections in the user's order. Empty
/// sections are left out.
pub struct BaseTemplate;

static BASE_TEMPLATE: BaseTemplate = BaseTemplate;

pub fn renderer_for(_template_id: &str) -> &'static dyn ResumeRenderer {
    &BASE_TEMPLATE
}

const H2_STYLE: &str =
    "font-size:1.25rem;font-weight:700;margin:0 0 0.5rem;padding-bottom:0.25rem;border-bottom:2px solid #000";
const MUTED: &str = "color:#666";

impl ResumeRenderer for BaseTemplate {
    fn render(&self, input: &RenderInput<'_>) -> String {
        let resume = input.resume;
        let mut html = String::new();

        let _ = write!(
            html,
            r#"<div class="resume" style="max-width:8.5in;margin:0 auto;background:#fff;color:#000;padding:3rem;font-size:11pt;line-height:1.5;font-family:{}">"#,
            input.font.css_family()
        );
        render_header(&mut html, resume);
        for section in input.section_order {
            render_section(&mut html, resume, *section);
        }
        html.push_str("</div>");
        html
    }
}

fn render_header(html: &mut String, resume: &ResumeData) {
    let info = &resume.personal_info;
    let name = if info.full_name.is_empty() {
        "Your Name"
    } else {
        info.full_name.as_str()
    };

    html.push_str(r#"<header style="margin-bottom:1.5rem">"#);
    let _ = write!(
        html,
        r#"<h1 style="font-size:1.875rem;font-weight:700;margin:0 0 0.5rem;color:#1a1a1a">{}</h1>"#,
        escape_html(name)
    );
    if !resume.headline.is_empty() {
        let _ = write!(
            html,
            r#"<p style="font-size:1.125rem;margin:0 0 0.75rem;color:#4a4a4a">{}</p>"#,
            escape_html(&resume.headline)
        );
    }

    let links = &resume.links;
    let contacts = [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        Some(info.location.as_str()),
        links.linkedin.as_deref(),
        links.portfolio.as_deref(),
        links.github.as_deref(),
    ];
    let _ = write!(
        html,
        r#"<div style="display:flex;flex-wrap:wrap;gap:0.25rem 1rem;font-size:0.875rem;{MUTED}">"#
    );
    for contact in contacts.into_iter().flatten().filter(|c| !c.is_empty()) {
        let _ = write!(html, "<span>{}</span>", escape_html(contact));
    }
    html.push_str("</div></header>");
}

fn render_section(html: &mut String, resume: &ResumeData, section: SectionId) {
    match section {
        SectionId::Summary => {
            if resume.summary.is_empty() {
                return;
            }
            open_section(html, section, "PROFESSIONAL SUMMARY");
            let _ = write!(html, r#"<p style="font-size:0.875rem">{}</p>"#, escape_html(&resume.summary));
        }
        SectionId::Skills => {
            let skills = normalize_skill_list(&resume.skills);
            if skills.is_empty() {
                return;
            }
            open_section(html, section, "SKILLS");
            let _ = write!(
                html,
                r#"<p style="font-size:0.875rem">{}</p>"#,
                escape_html(&skills.join(", "))
            );
        }
        SectionId::Experience => {
            if resume.experience.is_empty() {
                return;
            }
            open_section(html, section, "PROFESSIONAL EXPERIENCE");
            for exp in &resume.experience {
                let end = if exp.current { "Present" } else { exp.end_date.as_str() };
                let _ = write!(
                    html,
                    r#"<div class="entry"><div style="display:flex;justify-content:space-between"><h3 style="font-weight:700;margin:0">{}</h3><span style="font-size:0.875rem;{MUTED}">{} - {}</span></div>"#,
                    escape_html(&exp.position),
                    escape_html(&exp.start_date),
                    escape_html(end)
                );
                let _ = write!(
                    html,
                    r#"<div style="display:flex;justify-content:space-between"><p style="font-size:0.875rem;font-weight:600;margin:0;color:#4a4a4a">{}</p><span style="font-size:0.875rem;{MUTED}">{}</span></div>"#,
                    escape_html(&exp.company),
                    escape_html(&exp.location)
                );
                let bullets: Vec<&String> =
                    exp.bullets.iter().filter(|b| !b.trim().is_empty()).collect();
                if !bullets.is_empty() {
                    html.push_str(r#"<ul style="font-size:0.875rem">"#);
                    for bullet in bullets {
                        let _ = write!(html, "<li>{}</li>", escape_html(bullet));
                    }
                    html.push_str("</ul>");
                }
                html.push_str("</div>");
            }
        }
        SectionId::Projects => {
            if resume.projects.is_empty() {
                return;
            }
            open_section(html, section, "PROJECTS");
            for project in &resume.projects {
                let _ = write!(
                    html,
                    r#"<div class="entry"><div style="display:flex;justify-content:space-between"><h3 style="font-weight:700;margin:0">{}</h3>"#,
                    escape_html(&project.name)
                );
                if let Some(link) = project.link.as_deref().filter(|l| !l.is_empty()) {
                    let _ = write!(
                        html,
                        r#"<span style="font-size:0.875rem;{MUTED}">{}</span>"#,
                        escape_html(link)
                    );
                }
                let _ = write!(
                    html,
                    r#"</div><p style="font-size:0.875rem;margin:0">{}</p>"#,
                    escape_html(&project.description)
                );
                if !project.technologies.is_empty() {
                    let _ = write!(
                        html,
                        r#"<p style="font-size:0.875rem;{MUTED}"><strong>Technologies:</strong> {}</p>"#,
                        escape_html(&project.technologies.join(", "))
                    );
                }
                html.push_str("</div>");
            }
        }
        SectionId::Education => {
            if resume.education.is_empty() {
                return;
            }
            open_section(html, section, "EDUCATION");
            for edu in &resume.education {
                let _ = write!(
                    html,
                    r#"<div class="entry"><div style="display:flex;justify-content:space-between"><h3 style="font-weight:700;margin:0">{}</h3><span style="font-size:0.875rem;{MUTED}">{}</span></div>"#,
                    escape_html(&edu.institution),
                    escape_html(&edu.graduation_date)
                );
                let degree = if edu.field.is_empty() {
                    edu.degree.clone()
                } else {
                    format!("{} in {}", edu.degree, edu.field)
                };
                let _ = write!(html, r#"<p style="font-size:0.875rem;margin:0">{}</p>"#, escape_html(&degree));
                if !edu.location.is_empty() {
                    let _ = write!(
                        html,
                        r#"<p style="font-size:0.875rem;margin:0;{MUTED}">{}</p>"#,
                        escape_html(&edu.location)
                    );
                }
                html.push_str("</div>");
            }
        }
        SectionId::Certifications => {
            let certifications = normalize_certification_list(&resume.certifications);
            if certifications.is_empty() {
                return;
            }
            open_section(html, section, "CERTIFICATIONS");
            html.push_str(r#"<ul style="font-size:0.875rem">"#);
            for cert in &certifications {
                let _ = write!(html, "<li>{}</li>", escape_html(cert));
            }
            html.push_str("</ul>");
        }
    }
    html.push_str("</section>");
}

fn open_section(html: &mut String, section: SectionId, title: &str) {
    let _ = write!(
        html,
        r#"<section data-section="{section}" style="margin-bottom:1.5rem"><h2 style="{H2_STYLE}">{title}</h2>"#
    );
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::default_section_order;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
                location: "London".to_string(),
            },
            headline: "Analytical Engine Programmer".to_string(),
            summary: "First programmer.".to_string(),
            skills: vec!["Mathematics".to_string(), "Notes".to_string()],
            experience: vec![ExperienceEntry {
                company: "Babbage & Co".to_string(),
                position: "Collaborator".to_string(),
                start_date: "1842".to_string(),
                current: true,
                bullets: vec!["Wrote Note G".to_string(), "  ".to_string()],
                ..ExperienceEntry::blank()
            }],
            education: vec![EducationEntry {
                institution: "Home tutoring".to_string(),
                degree: "Private study".to_string(),
                field: "Mathematics".to_string(),
                ..Default::default()
            }],
            projects: vec![ProjectEntry {
                name: "Note G".to_string(),
                description: "Bernoulli numbers".to_string(),
                technologies: vec!["Punch cards".to_string()],
                link: None,
            }],
            certifications: vec!["Royal Society guest".to_string()],
            ..Default::default()
        }
    }

    fn render(resume: &ResumeData, order: &[SectionId]) -> String {
        renderer_for("rc-classic").render(&RenderInput {
            resume,
            section_order: order,
            font: ResumeFont::TimesNewRoman,
        })
    }

    #[test]
    fn test_sections_follow_user_order() {
        let order = [
            SectionId::Certifications,
            SectionId::Summary,
            SectionId::Skills,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Education,
        ];
        let html = render(&sample(), &order);
        let certs = html.find("CERTIFICATIONS").unwrap();
        let summary = html.find("PROFESSIONAL SUMMARY").unwrap();
        let education = html.find("EDUCATION").unwrap();
        assert!(certs < summary);
        assert!(summary < education);
    }

    #[test]
    fn test_empty_resume_renders_placeholder_name_only() {
        let html = render(&ResumeData::default(), &default_section_order());
        assert!(html.contains("Your Name"));
        assert!(!html.contains("<section"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(&sample(), &default_section_order());
        assert!(html.contains("Babbage &amp; Co"));
        assert!(!html.contains("Babbage & Co"));
    }

    #[test]
    fn test_current_role_shows_present_and_blank_bullets_skipped() {
        let html = render(&sample(), &default_section_order());
        assert!(html.contains("1842 - Present"));
        assert_eq!(html.matches("<li>").count(), 2); // one bullet + one certification
    }

    #[test]
    fn test_font_and_degree_field() {
        let html = render(&sample(), &default_section_order());
        assert!(html.contains("font-family:'Times New Roman'"));
        assert!(html.contains("Private study in Mathematics"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
