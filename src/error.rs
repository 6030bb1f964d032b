use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Client input was malformed.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Backend failure. Only `action` reaches the client; `source` is logged.
    #[error("Failed to {action}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Builds a `map_err` adapter tagging a storage failure with the action it interrupted.
    pub fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Storage { action, source } = &self {
            tracing::error!(error = %source, "Failed to {}", action);
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_hides_backend_detail() {
        let err = AppError::storage("fetch items")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch items");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::Validation("Invalid item ID".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Item not found".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
