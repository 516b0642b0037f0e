use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::editor::action_verbs::{apply_action_verb, ACTION_VERBS};
use crate::editor::tips::{tips_for, SectionTips, HEADLINE_TIPS};
use crate::editor::validation::{validate_resume_data, ValidationErrors};
use crate::models::preferences::SectionId;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TipsResponse {
    pub headline: SectionTips,
    pub sections: IndexMap<SectionId, SectionTips>,
}

#[derive(Deserialize)]
pub struct ApplyVerbRequest {
    pub text: String,
    pub verb: String,
}

#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: ValidationErrors,
}

/// GET /api/v1/tips
pub async fn handle_get_tips() -> Json<TipsResponse> {
    Json(TipsResponse {
        headline: HEADLINE_TIPS,
        sections: SectionId::ALL
            .into_iter()
            .map(|id| (id, tips_for(id)))
            .collect(),
    })
}

/// GET /api/v1/action-verbs
pub async fn handle_list_action_verbs() -> Json<&'static [&'static str]> {
    Json(ACTION_VERBS)
}

/// POST /api/v1/action-verbs/apply
pub async fn handle_apply_action_verb(Json(req): Json<ApplyVerbRequest>) -> Json<TextResponse> {
    Json(TextResponse {
        text: apply_action_verb(&req.text, &req.verb),
    })
}

/// GET /api/v1/resume/validation
///
/// Advisory only: the draft is never rejected.
pub async fn handle_validate_resume(State(state): State<AppState>) -> Json<ValidationResponse> {
    let store = state.store.lock().await;
    let errors = validate_resume_data(&store.state().draft_resume_data);
    Json(ValidationResponse {
        valid: errors.is_empty(),
        errors,
    })
}
