use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::io;
use thiserror::Error;
use tracing::error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The input text normalizes to the empty string.
    #[error("Empty input text")]
    EmptyInput,

    /// Represents request validation errors (e.g., neither `text` nor `texts` supplied).
    #[error("{0}")]
    Validation(String),

    /// A stored analysis that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Represents errors originating from the database, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents errors raised while applying schema migrations.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the error was caused by the client's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput | AppError::Validation(_) | AppError::NotFound(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyInput | AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Io(io::Error::other(format!("HTTP error: {}", err)))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if self.is_client_error() {
            self.to_string()
        } else {
            error!("Request failed: {}", self);
            format!("Analysis failed: {}", self)
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
