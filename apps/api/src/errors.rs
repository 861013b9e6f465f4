use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ModelError;
use crate::locale::UnknownLocale;
use crate::models::candidate::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),

    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnknownLocale(e) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_LOCALE", e.to_string())
            }
            AppError::Profile(e) => (StatusCode::BAD_REQUEST, "INVALID_PROFILE", e.to_string()),
            AppError::UnsupportedDocument(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_DOCUMENT",
                msg.clone(),
            ),
            AppError::Model(ModelError::Timeout(_)) => {
                tracing::error!("Model error: {self}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "MODEL_TIMEOUT",
                    "The assistant took too long to answer. Please send your message again."
                        .to_string(),
                )
            }
            AppError::Model(ModelError::Unavailable(_)) => {
                tracing::error!("Model error: {self}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_UNAVAILABLE",
                    "The assistant is unavailable right now. Please send your message again."
                        .to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
