//! Shared Error Types
//!
//! This module defines error types that are shared between the domain types
//! and the backend services. These errors represent input problems that are
//! reported back to the caller as a `fail` envelope rather than as a crash.
//!
//! # Usage
//!
//! ```rust
//! use mulberry::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "identifier cannot be empty");
//! assert!(error.to_string().contains("email"));
//! ```
use thiserror::Error;

/// Shared error types for domain validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
