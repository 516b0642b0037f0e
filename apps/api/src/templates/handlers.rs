use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::state::StoreState;
use crate::templates::catalog::{catalog, CategoryListing};
use crate::templates::export::{export_filename, print_document};
use crate::templates::render::{renderer_for, RenderInput};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<CategoryListing>> {
    Json(catalog())
}

fn render_selected(state: &StoreState) -> Result<String, AppError> {
    let template_id = state
        .selected_template_id
        .as_deref()
        .ok_or(AppError::TemplateNotSelected)?;
    Ok(renderer_for(template_id).render(&RenderInput {
        resume: &state.draft_resume_data,
        section_order: &state.section_order,
        font: state.resume_font,
    }))
}

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.store.lock().await;
    Ok(Html(render_selected(store.state())?))
}

/// GET /api/v1/export
///
/// Returns a print document; the client's print dialog produces the PDF.
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (markup, filename) = {
        let store = state.store.lock().await;
        let current = store.state();
        let markup = render_selected(current)?;
        (
            markup,
            export_filename(&current.draft_resume_data.personal_info.full_name),
        )
    };

    let document = print_document(&markup, &filename, state.print_timing());
    let disposition = HeaderValue::from_str(&format!(
        "inline; filename=\"{}\"",
        header_safe(&filename)
    ))
    .context("Export filename is not a valid header value")?;

    tracing::info!("Exporting resume as {filename}");
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Html(document)))
}

/// Keeps the quoted filename within visible ASCII.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
