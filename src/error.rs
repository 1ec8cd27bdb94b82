//!
//! # Custom Error Handling
//!
//! This module defines `AppError`, the single error type returned by every store,
//! auth and route operation in the service.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so a handler can return
//! `Result<_, AppError>` and get a JSON `{"error": ...}` body with the right status.
//! Server-side faults are logged with their detail and reported to the caller only
//! as a generic message.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Missing, malformed, invalid or expired credentials (HTTP 401).
    Unauthorized(String),
    /// A request body that could not be parsed (HTTP 400).
    BadRequest(String),
    /// Unknown email at login, or a task that does not exist for the caller (HTTP 404).
    NotFound(String),
    /// Registration with an email that already has an account (HTTP 400).
    DuplicateEmail,
    /// Password did not match the stored hash (HTTP 400).
    InvalidCredentials,
    /// Unexpected server-side failure outside the storage layer (HTTP 500).
    InternalServerError(String),
    /// Unexpected persistence-layer fault (HTTP 500).
    StorageFailure(String),
    /// Input that failed field validation (HTTP 422 Unprocessable Entity).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DuplicateEmail => write!(f, "Duplicate email"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::StorageFailure(msg) => write!(f, "Storage Failure: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::DuplicateEmail | AppError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::StorageFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::ValidationError(msg) => msg.clone(),
            AppError::DuplicateEmail => "User already exists".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            // Detail stays in the log; the caller gets a generic body.
            AppError::InternalServerError(detail) | AppError::StorageFailure(detail) => {
                log::error!("{}: {}", self.status_code(), detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound`; unique-constraint violations become
/// `DuplicateEmail`, since the only unique index besides primary keys is on
/// `users.email`. Everything else is a `StorageFailure`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(ref db) if db.is_unique_violation() => AppError::DuplicateEmail,
            _ => AppError::StorageFailure(error.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(error: sqlx::migrate::MigrateError) -> AppError {
        AppError::StorageFailure(format!("Migration failed: {}", error))
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// A blocking-pool job that was cancelled or panicked.
impl From<actix_web::error::BlockingError> for AppError {
    fn from(error: actix_web::error::BlockingError) -> AppError {
        AppError::InternalServerError(format!("Blocking task failed: {}", error))
    }
}
