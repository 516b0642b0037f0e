//! Startup repair of a persisted store record.
//!
//! The record may come from any earlier release, or from the browser build's
//! local storage, so nothing about its shape is trusted. Each field is decoded
//! on its own and falls back to its initial value when it does not fit.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::editor::certifications::normalize_certifications;
use crate::editor::skills::normalize_skills;
use crate::models::preferences::ResumeFont;
use crate::models::resume::{EducationEntry, ResumeData};
use crate::store::section_order::heal_section_order;
use crate::store::state::StoreState;

const LEGACY_GPA_KEYS: &[&str] = &["gpa", "GPA", "Gpa"];

static NULL: Value = Value::Null;

/// Parses raw storage contents into a clean state. Never fails.
pub fn rehydrate_str(raw: Option<&str>) -> StoreState {
    let Some(raw) = raw else {
        info!("No persisted state found, starting with an empty resume");
        return StoreState::default();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => rehydrate(&value),
        Err(e) => {
            warn!("Persisted state is not valid JSON ({e}), starting fresh");
            StoreState::default()
        }
    }
}

/// Builds a clean state from a loosely-typed record.
///
/// Order of repair:
/// 1. missing or mistyped top-level keys fall back to defaults
/// 2. skills are normalized (legacy comma blobs split, duplicates removed)
/// 3. certifications are normalized
/// 4. GPA is stripped from education entries
/// 5. the section order is healed
pub fn rehydrate(value: &Value) -> StoreState {
    let Some(record) = unwrap_envelope(value) else {
        warn!("Persisted state is not an object, starting fresh");
        return StoreState::default();
    };

    let defaults = StoreState::default();
    let draft = record.get("draftResumeData").and_then(Value::as_object);

    let draft_resume_data = match draft {
        Some(draft) => rehydrate_resume(draft),
        None => ResumeData::default(),
    };

    StoreState {
        selected_template_id: record
            .get("selectedTemplateId")
            .and_then(Value::as_str)
            .map(String::from),
        selected_category: decode_or(record.get("selectedCategory"), None),
        draft_resume_data,
        resume_font: decode_or::<ResumeFont>(record.get("resumeFont"), defaults.resume_font),
        section_order: heal_section_order(record.get("sectionOrder").unwrap_or(&NULL)),
    }
}

/// Accepts both the bare record and the `{"state": {...}, "version": N}`
/// envelope the browser persistence layer writes.
fn unwrap_envelope(value: &Value) -> Option<&Map<String, Value>> {
    let record = value.as_object()?;
    if !record.contains_key("draftResumeData") {
        if let Some(inner) = record.get("state").and_then(Value::as_object) {
            info!("Unwrapping browser persistence envelope");
            return Some(inner);
        }
    }
    Some(record)
}

fn rehydrate_resume(draft: &Map<String, Value>) -> ResumeData {
    let defaults = ResumeData::default();
    let field = |key: &str| draft.get(key).unwrap_or(&NULL);

    ResumeData {
        personal_info: decode_fields(field("personalInfo")).unwrap_or_default(),
        headline: decode_or(draft.get("headline"), defaults.headline),
        summary: decode_or(draft.get("summary"), defaults.summary),
        experience: decode_entries(field("experience")),
        education: clean_education(field("education")),
        skills: normalize_skills(field("skills")),
        projects: decode_entries(field("projects")),
        certifications: normalize_certifications(field("certifications")),
        links: decode_fields(field("links")).unwrap_or_default(),
    }
}

/// Decodes every education entry into the five known fields, dropping GPA.
fn clean_education(value: &Value) -> Vec<EducationEntry> {
    if let Value::Array(items) = value {
        let with_gpa = items
            .iter()
            .filter(|item| LEGACY_GPA_KEYS.iter().any(|k| item.get(k).is_some()))
            .count();
        if with_gpa > 0 {
            info!("Stripping GPA from {with_gpa} legacy education entries");
        }
    }
    decode_entries(value)
}

fn decode_or<T: DeserializeOwned>(value: Option<&Value>, fallback: T) -> T {
    match value {
        None | Some(Value::Null) => fallback,
        Some(v) => serde_json::from_value(v.clone()).unwrap_or_else(|e| {
            warn!("Discarding malformed persisted value {v}: {e}");
            fallback
        }),
    }
}

/// Decodes every object entry field by field; non-objects are skipped.
fn decode_entries<T: DeserializeOwned + Default>(value: &Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let entry = decode_fields(item);
            if entry.is_none() {
                warn!("Skipping persisted entry that is not an object: {item}");
            }
            entry
        })
        .collect()
}

/// Builds a `T` from a JSON object one field at a time.
///
/// A field whose value does not fit (wrong type, `null` for a string) is left
/// at its default without touching its siblings. String lists keep their
/// string items. `None` when `value` is not an object.
fn decode_fields<T: DeserializeOwned + Default>(value: &Value) -> Option<T> {
    let Value::Object(fields) = value else {
        if !value.is_null() {
            warn!("Discarding malformed persisted value {value}");
        }
        return None;
    };

    let mut accepted = Map::new();
    for (key, raw) in fields {
        let candidates = [Some(raw.clone()), string_items(raw)];
        let fitted = candidates.into_iter().flatten().find(|candidate| {
            let mut trial = accepted.clone();
            trial.insert(key.clone(), candidate.clone());
            serde_json::from_value::<T>(Value::Object(trial)).is_ok()
        });
        match fitted {
            Some(candidate) => {
                accepted.insert(key.clone(), candidate);
            }
            None => warn!("Discarding malformed persisted field {key}: {raw}"),
        }
    }
    Some(serde_json::from_value(Value::Object(accepted)).unwrap_or_default())
}

/// The string elements of a mixed array, when it has any non-string element.
fn string_items(value: &Value) -> Option<Value> {
    let Value::Array(items) = value else {
        return None;
    };
    if items.iter().all(Value::is_string) {
        return None;
    }
    Some(Value::Array(
        items.iter().filter(|item| item.is_string()).cloned().collect(),
    ))
}
