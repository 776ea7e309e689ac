//! Unified API error type with Axum `IntoResponse` support.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::bridge::BridgeError;

/// Fallback message when the AI service fails without saying why.
pub const AI_PROCESSING_FAILED: &str = "AI processing failed";

/// API error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({
            "success": false,
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::Failed { stderr, .. } if !stderr.is_empty() => {
                ApiError::Internal(stderr)
            }
            BridgeError::Failed { .. } => ApiError::Internal(AI_PROCESSING_FAILED.into()),
            other => ApiError::Internal(format!("{AI_PROCESSING_FAILED}: {other}")),
        }
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
