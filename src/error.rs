//! Error types for the biblioteca server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or out-of-range input (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced entity absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure, carrying the operation prefix the
    /// API surfaces (500)
    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a store failure with a human-readable operation prefix
    pub fn db(context: impl Into<String>) -> impl FnOnce(sqlx::Error) -> AppError {
        let context = context.into();
        move |source| AppError::Database { context, source }
    }
}

/// The `success: false` half of the response envelope
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database { .. } => {
                tracing::error!("store error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(ErrorBody {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
