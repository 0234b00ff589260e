use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::candidate::processor::{process_candidate, ProcessedCandidate};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/process-candidate
///
/// The body is decoded by hand so that an empty, oversized or malformed body maps
/// to the `{"error": ...}` envelope instead of axum's plain-text rejection.
pub async fn handle_process_candidate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessedCandidate>, AppError> {
    let request_id = Uuid::new_v4();

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let error = body_rejection(&rejection, state.config.max_body_bytes);
            tracing::warn!(%request_id, "Rejected candidate payload: {error}");
            return Err(error);
        }
    };

    let payload = match decode_payload(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(%request_id, bytes = body.len(), "Rejected candidate payload: {e}");
            return Err(e);
        }
    };

    tracing::debug!(%request_id, bytes = body.len(), "Processing candidate payload");
    match process_candidate(payload, state.config.parallel_sections).await {
        Ok(processed) => {
            tracing::info!(
                %request_id,
                valid = processed.validation.valid,
                warnings = processed.validation.warnings.len(),
                "Candidate processed"
            );
            Ok(Json(processed))
        }
        Err(e) => {
            tracing::warn!(%request_id, "Candidate processing failed: {e}");
            Err(e)
        }
    }
}

fn body_rejection(rejection: &BytesRejection, limit: usize) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::InvalidPayload(rejection.body_text())
    }
}

fn decode_payload(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::EmptyPayload);
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidPayload(e.to_string()))
}

/// GET /api/test
pub async fn handle_test() -> Json<Value> {
    Json(serde_json::json!({ "message": "Candidate processing API is running" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload() {
        assert!(matches!(decode_payload(b""), Err(AppError::EmptyPayload)));
        assert!(matches!(decode_payload(b"  \n"), Err(AppError::EmptyPayload)));
        assert!(matches!(
            decode_payload(b"{not json"),
            Err(AppError::InvalidPayload(_))
        ));
        assert_eq!(
            decode_payload(br#"{"questionnaire": {}}"#).unwrap(),
            serde_json::json!({"questionnaire": {}})
        );
    }
}
