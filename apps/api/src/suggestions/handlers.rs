use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::suggestions::headline::generate_headline_suggestions;
use crate::suggestions::keywords::{get_suggestions, insert_keyword};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Deserialize)]
pub struct InsertKeywordRequest {
    pub text: String,
    pub keyword: String,
    /// Character offset; omitted means append.
    #[serde(default)]
    pub cursor: Option<usize>,
}

#[derive(Serialize)]
pub struct InsertKeywordResponse {
    pub text: String,
}

/// GET /api/v1/suggestions/keywords?q=
pub async fn handle_keyword_suggestions(
    Query(params): Query<KeywordQuery>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: get_suggestions(&params.q),
    })
}

/// POST /api/v1/suggestions/keywords/insert
pub async fn handle_insert_keyword(
    Json(req): Json<InsertKeywordRequest>,
) -> Json<InsertKeywordResponse> {
    Json(InsertKeywordResponse {
        text: insert_keyword(&req.text, &req.keyword, req.cursor),
    })
}

/// GET /api/v1/suggestions/headlines
pub async fn handle_headline_suggestions(
    State(state): State<AppState>,
) -> Json<SuggestionsResponse> {
    let store = state.store.lock().await;
    Json(SuggestionsResponse {
        suggestions: generate_headline_suggestions(&store.state().draft_resume_data),
    })
}
