use serde::Serialize;

use crate::models::preferences::TemplateCategory;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub features: &'static [&'static str],
}

/// One gallery section.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: TemplateCategory,
    pub templates: Vec<TemplateMetadata>,
}

macro_rules! template {
    ($id:literal, $name:literal, $description:literal, $category:ident, [$($feature:literal),*]) => {
        TemplateMetadata {
            id: $id,
            name: $name,
            description: $description,
            category: TemplateCategory::$category,
            features: &[$($feature),*],
        }
    };
}

const TEMPLATES: &[TemplateMetadata] = &[
    template!("rc-classic", "Classic Professional", "Traditional format with clean lines and professional spacing", ReverseChronological, ["Clean", "Traditional", "ATS-Friendly"]),
    template!("rc-modern", "Modern Minimalist", "Contemporary design with subtle accents", ReverseChronological, ["Modern", "Minimalist", "Clean"]),
    template!("rc-executive", "Executive", "Sophisticated layout for senior positions", ReverseChronological, ["Professional", "Executive", "Elegant"]),
    template!("rc-compact", "Compact", "Space-efficient design for extensive experience", ReverseChronological, ["Compact", "Efficient", "Dense"]),
    template!("rc-bold", "Bold Headers", "Strong section headers for easy scanning", ReverseChronological, ["Bold", "Scannable", "Clear"]),
    template!("rc-timeline", "Timeline", "Visual timeline emphasizing career progression", ReverseChronological, ["Visual", "Timeline", "Progressive"]),
    template!("rc-simple", "Simple & Clean", "No-frills design focusing on content", ReverseChronological, ["Simple", "Content-First", "Basic"]),
    template!("rc-academic", "Academic", "Formal layout suitable for academic positions", ReverseChronological, ["Academic", "Formal", "Detailed"]),
    template!("fs-skills-first", "Skills First", "Prominent skills section at the top", Functional, ["Skills-Focused", "Modern", "Flexible"]),
    template!("fs-competency", "Competency Based", "Organized by core competencies", Functional, ["Competency", "Organized", "Clear"]),
    template!("fs-achievement", "Achievement Focused", "Highlights key achievements and skills", Functional, ["Achievement", "Impact", "Results"]),
    template!("fs-career-change", "Career Changer", "Ideal for transitioning to new industries", Functional, ["Flexible", "Transferable", "Adaptive"]),
    template!("fs-project", "Project Showcase", "Emphasizes projects and portfolio work", Functional, ["Project-Based", "Portfolio", "Creative"]),
    template!("fs-technical", "Technical Skills", "Detailed technical skills breakdown", Functional, ["Technical", "Detailed", "Comprehensive"]),
    template!("fs-consultant", "Consultant", "Highlights diverse skill sets and expertise", Functional, ["Versatile", "Expert", "Diverse"]),
    template!("hc-balanced", "Balanced", "Equal emphasis on skills and experience", Hybrid, ["Balanced", "Comprehensive", "Complete"]),
    template!("hc-professional", "Professional Hybrid", "Professional layout combining best of both formats", Hybrid, ["Professional", "Versatile", "Complete"]),
    template!("hc-tech", "Tech Professional", "Optimized for technology roles", Hybrid, ["Tech", "Modern", "Detailed"]),
    template!("hc-manager", "Manager", "Highlights leadership and technical skills", Hybrid, ["Leadership", "Management", "Strategic"]),
    template!("hc-creative", "Creative Professional", "Balances creativity with professionalism", Hybrid, ["Creative", "Unique", "Professional"]),
    template!("hc-senior", "Senior Professional", "For experienced professionals with diverse backgrounds", Hybrid, ["Senior", "Experienced", "Comprehensive"]),
    template!("hc-startup", "Startup Ready", "Dynamic format for fast-paced environments", Hybrid, ["Dynamic", "Agile", "Versatile"]),
];

pub fn find_template(id: &str) -> Option<&'static TemplateMetadata> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// The gallery, grouped by category in display order.
pub fn catalog() -> Vec<CategoryListing> {
    TemplateCategory::ALL
        .into_iter()
        .map(|category| CategoryListing {
            category,
            templates: TEMPLATES
                .iter()
                .filter(|t| t.category == category)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_groups_by_category() {
        let listing = catalog();
        let counts: Vec<usize> = listing.iter().map(|c| c.templates.len()).collect();
        assert_eq!(counts, vec![8, 7, 7]);
        assert!(listing
            .iter()
            .all(|c| c.templates.iter().all(|t| t.category == c.category)));
    }

    #[test]
    fn test_template_ids_are_unique() {
        let mut ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_find_template() {
        let found = find_template("fs-technical").unwrap();
        assert_eq!(found.name, "Technical Skills");
        assert_eq!(found.category, TemplateCategory::Functional);
        assert!(find_template("does-not-exist").is_none());
    }
}
