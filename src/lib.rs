//! Mulberry - Main Library
//!
//! Mulberry is the backend of a dating-style social app: users sign up,
//! verify their email, receive a daily list of matches, chat, and are offered
//! a discounted activity once a conversation becomes mutual.
//!
//! # Module Structure
//!
//! The library is organized into two modules:
//!
//! - **`shared`** - Serializable domain types
//!   - Conversation keys and records, chat messages
//!   - Activity offers, user profiles, match records
//!   - The `{status, data, message}` response envelope
//!   - Configuration and validation errors
//!
//! - **`backend`** - Server-side code
//!   - Key-value store adapters (in-memory and Postgres)
//!   - Conversation ledger and mutual-engagement detector
//!   - Activity offer generator and match scorer
//!   - Accounts, sessions, mail delivery
//!   - Axum routing table and middleware
//!
//! # Usage
//!
//! ```rust,no_run
//! use mulberry::backend::server::init::create_app;
//! use mulberry::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Data Flow
//!
//! A message send enters the conversation ledger, which appends the message
//! and updates read state. The mutual-engagement detector then inspects the
//! conversation; the first time both participants have written, the activity
//! offer generator creates an offer and its identifier is threaded back into
//! the conversation as a system message.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Expected outcomes (not found, bad input) are `fail` envelopes, not errors
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
