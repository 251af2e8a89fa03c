//! Error normalization for HTTP responses
//!
//! Every error leaving a handler is classified and rendered as
//! `{ "success": false, "error": <message> }` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the HTTP boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("Duplicate field value entered")]
    Conflict,

    #[error("{}", join_messages(.0))]
    Validation(Vec<String>),

    #[error("{}", message_or_default(.message))]
    Unclassified {
        status: Option<u16>,
        message: Option<String>,
    },
}

fn join_messages(messages: &[String]) -> String {
    messages.join(", ")
}

fn message_or_default(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(AppError::DEFAULT_MESSAGE)
}

impl AppError {
    pub const DEFAULT_MESSAGE: &'static str = "Server Error";

    /// Single validation message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    /// Internal failure with a message and no explicit status
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Unclassified {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Map the error to the status code and message sent to the client
    ///
    /// An unusable explicit status is logged and replaced by 500 so the
    /// original message still reaches the client.
    pub fn normalize(&self) -> (StatusCode, String) {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unclassified { status: None, .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unclassified { status: Some(code), .. } => {
                match StatusCode::from_u16(*code) {
                    Ok(status) => status,
                    Err(e) => {
                        warn!("Invalid status code {} on error, using 500: {}", code, e);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                }
            }
        };
        (status, self.to_string())
    }
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.normalize();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status, message);
        } else {
            warn!("Request rejected ({}): {}", status, message);
        }

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::internal(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_shapes() {
        assert_eq!(
            AppError::NotFound.normalize(),
            (StatusCode::NOT_FOUND, "Resource not found".to_string())
        );
        assert_eq!(
            AppError::Conflict.normalize(),
            (StatusCode::BAD_REQUEST, "Duplicate field value entered".to_string())
        );
    }

    #[test]
    fn joins_validation_messages() {
        let err = AppError::Validation(vec![
            "Please add a title".to_string(),
            "Please add a body".to_string(),
        ]);
        assert_eq!(
            err.normalize(),
            (StatusCode::BAD_REQUEST, "Please add a title, Please add a body".to_string())
        );
    }

    #[test]
    fn unclassified_keeps_status_and_message() {
        let err = AppError::Unclassified {
            status: Some(403),
            message: Some("Not allowed".to_string()),
        };
        assert_eq!(err.normalize(), (StatusCode::FORBIDDEN, "Not allowed".to_string()));
    }

    #[test]
    fn unclassified_defaults_to_server_error() {
        let err = AppError::Unclassified {
            status: None,
            message: None,
        };
        assert_eq!(
            err.normalize(),
            (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_string())
        );
    }

    #[test]
    fn invalid_status_falls_back_to_500_with_message() {
        let err = AppError::Unclassified {
            status: Some(42),
            message: Some("odd".to_string()),
        };
        assert_eq!(err.normalize(), (StatusCode::INTERNAL_SERVER_ERROR, "odd".to_string()));
    }

    #[test]
    fn string_errors_become_internal() {
        let err: AppError = "Failed to lock timer".to_string().into();
        assert_eq!(err.normalize().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
