use serde_json::Value;
use tracing::debug;

use crate::models::preferences::{default_section_order, SectionId};

/// Repairs a persisted section order into a permutation of all six sections.
///
/// Recognized ids keep their persisted relative order; unknown values and
/// repeats are dropped; missing ids are appended in canonical order. A
/// non-array value yields the default order.
pub fn heal_section_order(persisted: &Value) -> Vec<SectionId> {
    let Value::Array(items) = persisted else {
        return default_section_order();
    };

    let mut order: Vec<SectionId> = Vec::with_capacity(SectionId::ALL.len());
    for item in items {
        let Some(id) = item.as_str().and_then(|s| s.parse::<SectionId>().ok()) else {
            debug!("Dropping unrecognized section id {item}");
            continue;
        };
        if !order.contains(&id) {
            order.push(id);
        }
    }

    for id in SectionId::ALL {
        if !order.contains(&id) {
            order.push(id);
        }
    }

    order
}

/// Swaps `id` with the section before it. `None` at the top or when absent.
pub fn moved_up(order: &[SectionId], id: SectionId) -> Option<Vec<SectionId>> {
    let index = order.iter().position(|s| *s == id)?;
    if index == 0 {
        return None;
    }
    let mut next = order.to_vec();
    next.swap(index - 1, index);
    Some(next)
}

/// Swaps `id` with the section after it. `None` at the bottom or when absent.
pub fn moved_down(order: &[SectionId], id: SectionId) -> Option<Vec<SectionId>> {
    let index = order.iter().position(|s| *s == id)?;
    if index + 1 >= order.len() {
        return None;
    }
    let mut next = order.to_vec();
    next.swap(index, index + 1);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use SectionId::*;

    #[test]
    fn test_heal_appends_missing_in_canonical_order() {
        assert_eq!(
            heal_section_order(&json!(["skills", "summary"])),
            vec![Skills, Summary, Experience, Projects, Education, Certifications]
        );
    }

    #[test]
    fn test_heal_non_list_returns_default() {
        assert_eq!(heal_section_order(&json!("not-a-list")), default_section_order());
        assert_eq!(heal_section_order(&json!(null)), default_section_order());
        assert_eq!(heal_section_order(&json!({"0": "skills"})), default_section_order());
    }

    #[test]
    fn test_heal_drops_unknown_and_non_string_ids() {
        assert_eq!(
            heal_section_order(&json!(["contact", 3, "education", null, "awards"])),
            vec![Education, Summary, Skills, Experience, Projects, Certifications]
        );
    }

    #[test]
    fn test_heal_dedups_repeated_ids() {
        let healed = heal_section_order(&json!(["skills", "skills", "summary"]));
        assert_eq!(healed.len(), 6);
        assert_eq!(&healed[..2], &[Skills, Summary]);
    }

    #[test]
    fn test_heal_keeps_full_custom_order() {
        let custom = json!([
            "certifications",
            "education",
            "projects",
            "experience",
            "skills",
            "summary"
        ]);
        assert_eq!(
            heal_section_order(&custom),
            vec![Certifications, Education, Projects, Experience, Skills, Summary]
        );
    }

    #[test]
    fn test_heal_empty_list_is_default() {
        assert_eq!(heal_section_order(&json!([])), default_section_order());
    }

    #[test]
    fn test_move_up_and_down() {
        let order = default_section_order();
        assert_eq!(
            moved_up(&order, Skills).unwrap(),
            vec![Skills, Summary, Experience, Projects, Education, Certifications]
        );
        assert_eq!(
            moved_down(&order, Education).unwrap(),
            vec![Summary, Skills, Experience, Projects, Certifications, Education]
        );
    }

    #[test]
    fn test_move_at_boundaries_is_none() {
        let order = default_section_order();
        assert!(moved_up(&order, Summary).is_none());
        assert!(moved_down(&order, Certifications).is_none());
    }

    #[test]
    fn test_move_absent_id_is_none() {
        let order = vec![Summary, Skills];
        assert!(moved_up(&order, Education).is_none());
        assert!(moved_down(&order, Education).is_none());
    }
}
