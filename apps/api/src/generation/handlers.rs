//! Axum route handlers for the Guide API.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::guide::GuideRequest;
use crate::render::render_markdown;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PrintQuery {
    pub role: String,
    pub seniority: Option<String>,
    pub count: Option<usize>,
}

impl From<PrintQuery> for GuideRequest {
    fn from(query: PrintQuery) -> Self {
        GuideRequest {
            role_id: query.role,
            seniority_id: query.seniority,
            count: query.count,
        }
    }
}

/// POST /api/v1/guides
///
/// Generates a fresh guide. Calling again with the same body is "regenerate":
/// a new random draw, so the questions and their order change.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GuideRequest>,
) -> Result<Response, AppError> {
    validate_request(&request, state.config.max_question_count)?;
    let guide = state.generate_guide(request)?;
    Ok(Json(guide).into_response())
}

/// GET /api/v1/guides/print?role=..&seniority=..&count=..
///
/// Same selection as `handle_generate`, rendered as print-ready Markdown.
pub async fn handle_print(
    State(state): State<AppState>,
    Query(query): Query<PrintQuery>,
) -> Result<Response, AppError> {
    let request = GuideRequest::from(query);
    validate_request(&request, state.config.max_question_count)?;

    let guide = state.generate_guide(request)?;
    let body = render_markdown(&guide, &state.catalog);

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        body,
    )
        .into_response())
}

fn validate_request(request: &GuideRequest, max_count: usize) -> Result<(), AppError> {
    if request.role_id.trim().is_empty() {
        return Err(AppError::Validation("role_id cannot be empty".to_string()));
    }
    if let Some(count) = request.count {
        if count == 0 || count > max_count {
            return Err(AppError::Validation(format!(
                "count must be between 1 and {max_count}, got {count}"
            )));
        }
    }
    Ok(())
}
