use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recruit_core::error::StoreError;
use recruit_core::submission::MSG_STORE_UNAVAILABLE;
use serde_json::json;

/// Application-level error type for read handlers.
///
/// Submission never produces an `AppError`; it always answers with a
/// success or failure payload. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(StoreError::DuplicateKey) => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Duplicate roll number".to_string(),
            ),
            AppError::Store(StoreError::ConnectionFailure(detail)) => {
                tracing::error!(error = %detail, "Application store unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    MSG_STORE_UNAVAILABLE.to_string(),
                )
            }
            AppError::Store(StoreError::Other(detail)) => {
                tracing::error!(error = %detail, "Application store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Response for a panic outside the submission route.
///
/// Same `{error, code}` shape as [`AppError`].
pub fn internal_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    let body = json!({
        "error": "An internal error occurred",
        "code": "INTERNAL_ERROR",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
