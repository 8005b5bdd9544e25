use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// The validation-class user-facing message.
pub const VALIDATION_MESSAGE: &str = "Please check your information and try again.";

/// The generic-class user-facing message. Used for every non-validation
/// failure so that raw internal error strings never reach the caller.
pub const GENERIC_MESSAGE: &str =
    "There was an error processing your submission. Please try again.";

/// Application-specific error types.
///
/// Notification failures are deliberately absent: the dispatcher has its
/// own error type ([`crate::notify::NotifyError`]) which the pipeline
/// catches at the notify boundary and never folds into its own result.
#[derive(Debug)]
pub enum AppError {
    /// Missing required field, malformed email, or missing commitment
    /// acknowledgement. Nothing was persisted or notified.
    Validation(String),
    /// Storage write failure. Fatal to the request; the caller should retry.
    Database(sqlx::Error),
    /// Payload could not be parsed as the expected shape at all.
    MalformedInput(String),
    /// Anything else that went wrong internally.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Every variant collapses to one of two user-visible message classes;
    /// internal detail is attached under `error` for diagnostics only and
    /// server-side failures are logged here.
    fn into_response(self) -> Response {
        let (status, message, detail) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE, Some(msg.clone()))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE, None)
            }
            AppError::MalformedInput(msg) => {
                tracing::warn!("Malformed submission payload: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_MESSAGE,
                    Some(msg.clone()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE, None)
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(detail) = detail {
            body["error"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
