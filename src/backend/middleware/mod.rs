//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Token check for protected routes and the `AuthUser` extractor
//! - **`extract`** - `ApiJson` and `ApiQuery`, whose rejections are envelopes

pub mod auth;
pub mod extract;

pub use auth::{auth_middleware, AuthUser};
pub use extract::{ApiJson, ApiQuery};
