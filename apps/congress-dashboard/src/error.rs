//! Error types for the congress dashboard

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use congress_core::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Legislator not found: {0}")]
    LegislatorNotFound(String),

    #[error("Invalid legislator id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LegislatorNotFound(id) => ApiError::LegislatorNotFound(id),
            CoreError::Database(e) => ApiError::Database(e),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::LegislatorNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Legislator not found: {}", id),
            ),
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid legislator id: {:?}", id),
            ),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
