//! JSON error envelope shared by every API handler: `{ "success": false, "message": ... }`.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lubbi_core::CoreError;
use thiserror::Error;

/// Message shown to clients for any server-side failure. Details go to the log only.
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Client mistake; the message is returned as-is.
    #[error("{0}")]
    BadRequest(String),

    /// Server-side failure; the detail is logged, the client gets a generic message.
    #[error("{0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        ApiError::Internal(format!("unreadable request body: {}", e.body_text()))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("malformed JSON body: {}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(detail) => {
                tracing::error!(target: "lubbi::gateway", error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (
            status,
            Json(serde_json::json!({ "success": false, "message": message })),
        )
            .into_response()
    }
}
