use axum::Json;

use crate::guidance::{best_practices, BestPractices};

/// GET /api/v1/best-practices
pub async fn handle_best_practices() -> Json<BestPractices> {
    Json(best_practices())
}
