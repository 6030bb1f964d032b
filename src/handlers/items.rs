use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{CreateItemInput, Item},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.items.list().await?;
    debug!(count = items.len(), "Listed items");
    Ok(Json(items))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let item = state.items.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    state.items.delete(&id).await?;
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
