//! Template catalog handlers for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use botforge_types::template::TemplateSummary;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/templates - List the built-in template catalog.
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TemplateSummary>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let templates = state.generator_service.list_templates();
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(templates, request_id, elapsed)
        .with_link("self", "/api/v1/templates");

    Ok(Json(resp))
}
