use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::certifications::{format_certifications, parse_certifications};
use crate::editor::skills::{format_skills, parse_skills};
use crate::errors::AppError;
use crate::models::preferences::{ResumeFont, SectionId};
use crate::models::resume::{
    EducationPatch, ExperiencePatch, Links, PersonalInfoPatch, ProjectPatch,
};
use crate::state::AppState;
use crate::store::state::StoreState;
use crate::templates::catalog::find_template;

/// Runs one mutation under the store lock and returns the committed state.
async fn commit(
    state: &AppState,
    mutation: impl FnOnce(&StoreState) -> StoreState,
) -> Result<Json<StoreState>, AppError> {
    let mut store = state.store.lock().await;
    let next = store.apply(mutation).await?.clone();
    Ok(Json(next))
}

/// Either a ready list or the raw text of an editor field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    List(Vec<String>),
    Text(String),
}

impl ListInput {
    fn into_list(self, parse: fn(&str) -> Vec<String>) -> Vec<String> {
        match self {
            ListInput::List(items) => items,
            ListInput::Text(text) => parse(&text),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FontRequest {
    pub font: ResumeFont,
}

#[derive(Debug, Deserialize)]
pub struct HeadlineRequest {
    pub headline: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: ListInput,
}

#[derive(Debug, Deserialize)]
pub struct CertificationsRequest {
    pub certifications: ListInput,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

fn parse_section(raw: &str) -> Result<SectionId, AppError> {
    raw.parse::<SectionId>().map_err(AppError::NotFound)
}

/// GET /api/v1/state
pub async fn handle_get_state(State(state): State<AppState>) -> Json<StoreState> {
    let store = state.store.lock().await;
    Json(store.state().clone())
}

/// Text-area contents for the list fields.
#[derive(Debug, Serialize)]
pub struct EditorTextResponse {
    pub skills: String,
    pub certifications: String,
}

/// GET /api/v1/resume/editor-text
pub async fn handle_get_editor_text(State(state): State<AppState>) -> Json<EditorTextResponse> {
    let store = state.store.lock().await;
    let resume = &store.state().draft_resume_data;
    Json(EditorTextResponse {
        skills: format_skills(&resume.skills),
        certifications: format_certifications(&resume.certifications),
    })
}

/// PUT /api/v1/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<StoreState>, AppError> {
    let template = find_template(&req.template_id)
        .ok_or_else(|| AppError::NotFound(format!("Template {} not found", req.template_id)))?;
    tracing::info!(
        "Selected template {} ({})",
        template.id,
        template.category.label()
    );
    commit(&state, |s| s.set_selected_template(template.id, template.category)).await
}

/// PUT /api/v1/font
pub async fn handle_set_font(
    State(state): State<AppState>,
    Json(req): Json<FontRequest>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.set_resume_font(req.font)).await
}

/// POST /api/v1/sections/:id/up
pub async fn handle_move_section_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoreState>, AppError> {
    let section = parse_section(&id)?;
    commit(&state, |s| s.move_section_up(section)).await
}

/// POST /api/v1/sections/:id/down
pub async fn handle_move_section_down(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoreState>, AppError> {
    let section = parse_section(&id)?;
    commit(&state, |s| s.move_section_down(section)).await
}

/// PATCH /api/v1/resume/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_personal_info(&patch)).await
}

/// PUT /api/v1/resume/headline
pub async fn handle_update_headline(
    State(state): State<AppState>,
    Json(req): Json<HeadlineRequest>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_headline(&req.headline)).await
}

/// PUT /api/v1/resume/summary
pub async fn handle_update_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_summary(&req.summary)).await
}

/// PUT /api/v1/resume/links
pub async fn handle_update_links(
    State(state): State<AppState>,
    Json(links): Json<Links>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_links(links)).await
}

/// PUT /api/v1/resume/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsRequest>,
) -> Result<Json<StoreState>, AppError> {
    let skills = req.skills.into_list(parse_skills);
    commit(&state, |s| s.update_skills(&skills)).await
}

/// PUT /api/v1/resume/certifications
pub async fn handle_update_certifications(
    State(state): State<AppState>,
    Json(req): Json<CertificationsRequest>,
) -> Result<Json<StoreState>, AppError> {
    let certifications = req.certifications.into_list(parse_certifications);
    commit(&state, |s| s.update_certifications(&certifications)).await
}

// ── Experience ───────────────────────────────────────────────────────────

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, StoreState::add_experience).await
}

/// PATCH /api/v1/resume/experience/:index
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_experience(index, &patch)).await
}

/// DELETE /api/v1/resume/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.remove_experience(index)).await
}

/// POST /api/v1/resume/experience/reorder
pub async fn handle_reorder_experience(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.reorder_experience(req.from, req.to)).await
}

// ── Education ────────────────────────────────────────────────────────────

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, StoreState::add_education).await
}

/// PATCH /api/v1/resume/education/:index
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_education(index, &patch)).await
}

/// DELETE /api/v1/resume/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.remove_education(index)).await
}

// ── Projects ─────────────────────────────────────────────────────────────

/// POST /api/v1/resume/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, StoreState::add_project).await
}

/// PATCH /api/v1/resume/projects/:index
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.update_project(index, &patch)).await
}

/// DELETE /api/v1/resume/projects/:index
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<StoreState>, AppError> {
    commit(&state, |s| s.remove_project(index)).await
}
