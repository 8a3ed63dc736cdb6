/**
 * Backend Error Types
 *
 * This module defines the error type returned by backend services and HTTP
 * handlers. Expected outcomes such as a missing entity are not errors; they
 * travel as `fail` envelopes. `BackendError` covers what is left.
 *
 * # Error Types
 *
 * - `HandlerError` - A deliberate HTTP-level rejection with its own message
 * - `Store` - The key-value store failed
 * - `Token` - A session token could not be issued
 * - `PasswordHash` - bcrypt failed
 * - `SharedError` - Validation errors from the shared module
 * - `Body` / `Query` - A request body or query string that did not deserialize
 *
 * # Exposure
 *
 * Only `HandlerError`, validation errors and malformed-request rejections
 * show their message to the caller. Everything else is answered with a generic message and logged.
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::activity::ActivityError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message shown to callers for unanticipated failures
pub const UNHANDLED_MESSAGE: &str = "Unhandled Exception occurs";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::extract::rejection::{JsonRejection, QueryRejection};
/// use axum::http::StatusCode;
/// use mulberry::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., unknown route, rejected request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Message returned to the caller
        message: String,
    },

    /// Key-value store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Session token could not be created
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failed
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Request body could not be read as JSON
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    /// Query string could not be deserialized
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `Body` / `Query` - The rejection's own status (400, 415 or 422)
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Body(rejection) => rejection.status(),
            Self::Query(rejection) => rejection.status(),
            Self::Store(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message that may be shown to the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err @ SharedError::ValidationError { .. }) => err.to_string(),
            Self::Body(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            _ => UNHANDLED_MESSAGE.to_string(),
        }
    }
}

impl From<ActivityError> for BackendError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::Store(err) => Self::Store(err),
            ActivityError::Invalid(err) => Self::SharedError(err),
            other => {
                tracing::error!("Activity error: {}", other);
                Self::handler(StatusCode::INTERNAL_SERVER_ERROR, UNHANDLED_MESSAGE)
            }
        }
    }
}
