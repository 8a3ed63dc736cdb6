//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in services and HTTP handlers and can be converted
//! to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` for errors and envelopes
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers can return
//! `Result<ApiResponse<T>, BackendError>` directly. Internal detail is
//! logged, never returned.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::fail_response;
pub use types::{BackendError, UNHANDLED_MESSAGE};
