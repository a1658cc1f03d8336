use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::classifier::ClassifierError;

pub const TEXT_REQUIRED: &str = "Text field is required";
pub const ANALYZE_FAILED: &str = "Failed to analyze resume";
pub const CLASSIFIER_UNAVAILABLE: &str = "Classification service unavailable";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Variants render as `{ "error": <message> }`, except `Body`, which keeps axum's own
/// rejection response (413 for oversized bodies). Upstream detail goes to the log only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unreadable request body: {0}")]
    Body(JsonRejection),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Classifier unavailable: {0}")]
    Unavailable(ClassifierError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Body(rejection) => return rejection.into_response(),
            // Logged by the handler, inside its request span
            AppError::Classifier(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ANALYZE_FAILED.to_string())
            }
            AppError::Unavailable(e) => {
                tracing::warn!("Classification service not ready: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    CLASSIFIER_UNAVAILABLE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
