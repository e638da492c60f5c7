//! Application error type and its HTTP rendering.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | [`AppError::Validation`] | 400 | `{"errors": [{"code", "description"}]}` |
//! | [`AppError::NotFound`] | 404 | `{"message"}` |
//! | [`AppError::Internal`] | 500 | `{"message"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::validation::{ErrorCode, ErrorInfo, ValidationError};

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<ErrorInfo>,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(code: ErrorCode) -> Self {
        Self::Validation(ValidationError::new(code))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    errors: vec![error.to_error_info()],
                }),
            )
                .into_response(),
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageBody { message }),
            )
                .into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_errors_array() {
        let (status, body) = render(AppError::bad_request(ErrorCode::InvalidLink)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": [{ "code": "BOOKMARKS_INVALID_LINK", "description": "Invalid link" }] })
        );
    }

    #[tokio::test]
    async fn test_banned_domain_rendering() {
        let (status, body) = render(ValidationError::banned("http://socket.io").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "BOOKMARKS_INVALID_DOMAIN");
        assert_eq!(body["errors"][0]["description"], "socket.io banned");
    }

    #[tokio::test]
    async fn test_not_found_and_internal() {
        let (status, body) = render(AppError::not_found("No bookmark with this id")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No bookmark with this id");

        let (status, _) = render(sqlx::Error::RowNotFound.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
