use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Prefix a store-side failure with what the caller was doing.
    ///
    /// Client errors pass through untouched.
    pub fn context(self, ctx: &str) -> Self {
        match self {
            AppError::Database(e) => AppError::Store(format!("{}: {}", ctx, e)),
            AppError::Store(msg) => AppError::Store(format!("{}: {}", ctx, msg)),
            AppError::DeadlineExceeded(msg) => {
                AppError::DeadlineExceeded(format!("{}: {}", ctx, msg))
            }
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Store(ref msg) => {
                tracing::error!("Store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::DeadlineExceeded(ref msg) => {
                tracing::error!("Deadline exceeded: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
