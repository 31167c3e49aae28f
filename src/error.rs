//! Application error type shared by the store, the service layer and the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by the URL store and service layer.
///
/// Each variant maps to one HTTP status class. Messages are safe to show to
/// end users; storage details are logged where the failure happens and never
/// carried in the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed user input (empty URL, bad scheme or host).
    #[error("{message}")]
    Validation { message: String },

    /// The requested short code does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// A uniqueness constraint was violated (short code already taken).
    #[error("{message}")]
    Conflict { message: String },

    /// Storage or other server-side failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Short code already exists");
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error")
    }
}
