pub mod items;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Reports 503 when the items database does not answer.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.items.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "service": "item-service", "database": "ok" })),
        ),
        Err(err) => {
            warn!(error = %err, "Health check could not reach the database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "service": "item-service", "database": "unavailable" })),
            )
        }
    }
}
