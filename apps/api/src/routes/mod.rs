pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::state::AppState;
use crate::store::handlers as store;
use crate::suggestions::handlers as suggestions;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Reference data
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/tips", get(editor::handle_get_tips))
        .route("/api/v1/action-verbs", get(editor::handle_list_action_verbs))
        .route(
            "/api/v1/action-verbs/apply",
            post(editor::handle_apply_action_verb),
        )
        // Preferences
        .route("/api/v1/state", get(store::handle_get_state))
        .route("/api/v1/template", put(store::handle_select_template))
        .route("/api/v1/font", put(store::handle_set_font))
        .route(
            "/api/v1/sections/:id/up",
            post(store::handle_move_section_up),
        )
        .route(
            "/api/v1/sections/:id/down",
            post(store::handle_move_section_down),
        )
        // Resume draft
        .route(
            "/api/v1/resume/personal-info",
            patch(store::handle_update_personal_info),
        )
        .route("/api/v1/resume/headline", put(store::handle_update_headline))
        .route("/api/v1/resume/summary", put(store::handle_update_summary))
        .route("/api/v1/resume/links", put(store::handle_update_links))
        .route("/api/v1/resume/skills", put(store::handle_update_skills))
        .route(
            "/api/v1/resume/certifications",
            put(store::handle_update_certifications),
        )
        .route("/api/v1/resume/experience", post(store::handle_add_experience))
        .route(
            "/api/v1/resume/experience/reorder",
            post(store::handle_reorder_experience),
        )
        .route(
            "/api/v1/resume/experience/:index",
            patch(store::handle_update_experience).delete(store::handle_remove_experience),
        )
        .route("/api/v1/resume/education", post(store::handle_add_education))
        .route(
            "/api/v1/resume/education/:index",
            patch(store::handle_update_education).delete(store::handle_remove_education),
        )
        .route("/api/v1/resume/projects", post(store::handle_add_project))
        .route(
            "/api/v1/resume/projects/:index",
            patch(store::handle_update_project).delete(store::handle_remove_project),
        )
        .route(
            "/api/v1/resume/editor-text",
            get(store::handle_get_editor_text),
        )
        .route(
            "/api/v1/resume/validation",
            get(editor::handle_validate_resume),
        )
        // Suggestions
        .route(
            "/api/v1/suggestions/keywords",
            get(suggestions::handle_keyword_suggestions),
        )
        .route(
            "/api/v1/suggestions/keywords/insert",
            post(suggestions::handle_insert_keyword),
        )
        .route(
            "/api/v1/suggestions/headlines",
            get(suggestions::handle_headline_suggestions),
        )
        // Output
        .route("/api/v1/preview", get(templates::handle_preview))
        .route("/api/v1/export", get(templates::handle_export))
        .with_state(state)
}
