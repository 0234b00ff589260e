use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("empty payload")]
    EmptyPayload,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("payload too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: usize },

    #[error("section worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::EmptyPayload | AppError::InvalidPayload(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Worker(e) => {
                tracing::error!("Section worker error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing the questionnaire".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
