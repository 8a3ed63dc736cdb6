//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Public and protected route groups
//! ```
//!
//! Public routes (signup, login, verification) are merged alongside the
//! protected group; only the protected group carries the auth layer.

/// Main router creation
pub mod router;

/// Route groups
pub mod api_routes;

pub use router::create_router;
