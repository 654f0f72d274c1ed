//! Error types for the redline API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use llm_client::LlmError;
use redline_core::RedlineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Document could not be parsed: {0}")]
    DocumentFormat(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Model error: {0}")]
    Model(#[from] LlmError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RedlineError> for ApiError {
    fn from(err: RedlineError) -> Self {
        match err {
            RedlineError::DocumentFormat(msg) => ApiError::DocumentFormat(msg),
            RedlineError::WriteError(msg) => ApiError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnsupportedFileType(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::DocumentFormat(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Document could not be parsed: {}", msg),
            ),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            ApiError::Model(e) => {
                tracing::warn!("Model call failed: {}", e);
                (StatusCode::BAD_GATEWAY, format!("Model error: {}", e))
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
