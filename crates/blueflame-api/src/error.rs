//! API error types and JSON error response formatting.
//!
//! Store failures are logged in full and answered with a short message;
//! SQL and file paths never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use blueflame_chat::ChatError;
use blueflame_core::error::BlueflameError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "internal_error").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    BadRequest(String),
    /// 422 Unprocessable Entity - body does not match the request schema.
    UnprocessableEntity(String),
    /// 500 Internal Server Error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BlueflameError> for ApiError {
    fn from(err: BlueflameError) -> Self {
        match err {
            BlueflameError::Validation(msg) => ApiError::BadRequest(msg),
            BlueflameError::StoreUnavailable(reason) => {
                tracing::error!(reason = %reason, "Document store unavailable");
                ApiError::Internal("Document store unavailable".to_string())
            }
            other => {
                tracing::error!(error = %other, "Document store operation failed");
                ApiError::Internal("Document store operation failed".to_string())
            }
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::MessageTooLong(max) => ApiError::BadRequest(format!(
                "message exceeds maximum length of {} characters",
                max
            )),
            ChatError::StoreUnavailable(reason) => {
                tracing::error!(reason = %reason, "Document store unavailable");
                ApiError::Internal("Document store unavailable".to_string())
            }
            ChatError::StorageError(detail) => {
                tracing::error!(error = %detail, "Chat persistence failed");
                ApiError::Internal("Failed to persist conversation".to_string())
            }
        }
    }
}
