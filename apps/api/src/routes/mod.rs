pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::generation::handlers as guides;
use crate::guidance::handlers as guidance;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog/roles", get(catalog::handle_list_roles))
        .route(
            "/api/v1/catalog/seniority-levels",
            get(catalog::handle_list_seniority_levels),
        )
        .route(
            "/api/v1/catalog/competencies",
            get(catalog::handle_list_competencies),
        )
        // Guide API
        .route("/api/v1/guides", post(guides::handle_generate))
        .route("/api/v1/guides/print", get(guides::handle_print))
        // Reference
        .route(
            "/api/v1/best-practices",
            get(guidance::handle_best_practices),
        )
        .with_state(state)
}
