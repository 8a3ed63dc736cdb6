//! Server Module
//!
//! Wires the services into an Axum router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store and mailer loading
//! └── init.rs         - Service wiring and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mulberry::backend::server::create_app;
//! use mulberry::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Backend loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::{build_state, create_app, create_app_with};
pub use state::AppState;
