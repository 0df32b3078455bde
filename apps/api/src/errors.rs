use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every request is isolated: a failing classification answers 400 and the
/// process keeps serving.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input: missing payload or missing/empty description.
    #[error("{0}")]
    Validation(String),

    /// Any failure during scanning, identification or extraction,
    /// collaborator failures included.
    #[error("{0}")]
    Classification(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Classification(msg) => {
                tracing::warn!("classification failed: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
