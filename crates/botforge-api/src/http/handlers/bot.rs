//! Generation and record handlers for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};

use botforge_types::bot::{BotConfig, GeneratedBotId};
use botforge_types::error::BotError;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/generate - Generate bot code and persist the record.
pub async fn generate_bot(
    State(state): State<AppState>,
    Json(config): Json<BotConfig>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let response = state.generator_service.generate_bot(config).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let bot_id = response.bot_id.clone();
    let data = serde_json::to_value(&response)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let resp = ApiResponse::success(data, request_id, elapsed)
        .with_link("self", &format!("/api/v1/bots/{bot_id}"))
        .with_link("bots", "/api/v1/bots");

    Ok(Json(resp))
}

/// GET /api/v1/bots - List generated bots, newest first (no code field).
pub async fn list_bots(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<serde_json::Value>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let bots = state.generator_service.list_bots().await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let bots_json = bots
        .iter()
        .map(|b| serde_json::to_value(b).map_err(|e| AppError::Internal(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    let resp = ApiResponse::success(bots_json, request_id, elapsed)
        .with_link("self", "/api/v1/bots");

    Ok(Json(resp))
}

/// GET /api/v1/bots/:id - Get a full generated-bot record.
pub async fn get_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let id = parse_bot_id(&id)?;
    let bot = state.generator_service.get_bot(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let data = serde_json::to_value(&bot).map_err(|e| AppError::Internal(e.to_string()))?;
    let resp = ApiResponse::success(data, request_id, elapsed)
        .with_link("self", &format!("/api/v1/bots/{}", bot.id));

    Ok(Json(resp))
}

/// DELETE /api/v1/bots/:id - Remove a generated-bot record.
pub async fn delete_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let id = parse_bot_id(&id)?;
    state.generator_service.delete_bot(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(
        serde_json::json!({"success": true}),
        request_id,
        elapsed,
    );

    Ok(Json(resp))
}

/// An unparsable id cannot match any record, so it is reported as not-found
/// rather than a validation failure.
fn parse_bot_id(raw: &str) -> Result<GeneratedBotId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Bot(BotError::NotFound))
}
