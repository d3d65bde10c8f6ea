//! Error handling - every failure renders as a flat `{ key: message }` body.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use thiserror::Error;

use devconnect_core::ports::AuthError;
use devconnect_core::validation::FieldErrors;
use devconnect_core::{DomainError, Missing, RepoError};
use devconnect_shared::ErrorResponse;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Bad request ({key}): {message}")]
    BadRequest { key: &'static str, message: String },

    #[error("Unauthorized ({key}): {message}")]
    Unauthorized { key: &'static str, message: String },

    #[error("Not found ({key}): {message}")]
    NotFound { key: &'static str, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized() -> Self {
        AppError::Unauthorized {
            key: "unauthorized",
            message: "Unauthorized".to_string(),
        }
    }
}

impl From<Missing> for AppError {
    fn from(missing: Missing) -> Self {
        AppError::NotFound {
            key: missing.key(),
            message: missing.message().to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body: ErrorResponse = match self {
            AppError::Validation(errors) => errors.iter().collect(),
            AppError::BadRequest { key, message }
            | AppError::Unauthorized { key, message }
            | AppError::NotFound { key, message } => ErrorResponse::single(*key, message.as_str()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::single("server", "Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let key = err.key();
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::NotFound(missing) => missing.into(),
            DomainError::NotOwner => AppError::Unauthorized {
                key,
                message: err.to_string(),
            },
            DomainError::AlreadyLiked | DomainError::NotLiked | DomainError::Duplicate { .. } => {
                AppError::BadRequest {
                    key,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound {
                key: "notFound",
                message: "Resource not found".to_string(),
            },
            RepoError::Constraint(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                AppError::BadRequest {
                    key: "conflict",
                    message: "Record conflicts with an existing one".to_string(),
                }
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => AppError::Internal(msg),
            other => {
                tracing::debug!(reason = %other, "Authentication rejected");
                AppError::unauthorized()
            }
        }
    }
}

/// `JsonConfig` error handler: malformed bodies are a 400 under `body`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest {
        key: "body",
        message: err.to_string(),
    }
    .into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
