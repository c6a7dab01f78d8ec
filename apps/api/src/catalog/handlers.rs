//! Read-only catalog endpoints used to populate role and seniority pickers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /api/v1/catalog/roles
///
/// Roles grouped by category, in picker order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Response {
    Json(state.catalog.roles_by_category()).into_response()
}

/// GET /api/v1/catalog/seniority-levels
///
/// Levels in ascending rank order.
pub async fn handle_list_seniority_levels(State(state): State<AppState>) -> Response {
    Json(&state.catalog.seniority_levels).into_response()
}

/// GET /api/v1/catalog/competencies
pub async fn handle_list_competencies(State(state): State<AppState>) -> Response {
    Json(&state.catalog.competencies).into_response()
}
