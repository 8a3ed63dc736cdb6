//! Backend Module
//!
//! This module contains all server-side code for Mulberry. It provides an
//! Axum HTTP server over a table-scoped key-value store.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`store`** - Key-value store trait and its in-memory/Postgres adapters
//! - **`chat`** - Conversation ledger, mutual-engagement detector, chat service
//! - **`activity`** - Activity catalog, offer generator and entry points
//! - **`matching`** - Match scoring and the cached daily match list
//! - **`auth`** - Accounts, sessions, verification codes, identity resolution
//! - **`mail`** - Outgoing mail delivery
//! - **`middleware`** - Request processing middleware
//! - **`routes`** - HTTP routing table
//! - **`server`** - Application state, service wiring, app creation
//! - **`error`** - Boundary error type
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── store/          - Key-value storage
//! ├── chat/           - Conversations and messages
//! ├── activity/       - Activity offers
//! ├── matching/       - Daily matches
//! ├── auth/           - Accounts and sessions
//! ├── mail/           - Mail delivery
//! ├── middleware/     - Request middleware
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers hold no per-request state of their own; everything lives in the
//! store. `AppState` only carries the services, each of which wraps an
//! `Arc<dyn KvStore>`.
//!
//! # Consistency
//!
//! The store is last-writer-wins. Two concurrent sends to the same
//! conversation can lose one update. Activity generation is the exception:
//! it uses a conditional create so at most one offer exists per conversation.
//!
//! # Error Handling
//!
//! Services return `ApiResponse` envelopes for expected outcomes and
//! `BackendError` for everything else. `BackendError` is converted to a
//! generic 500 response at the boundary and logged with full detail.

/// Key-value storage
pub mod store;

/// Conversation ledger, engagement detection and chat entry points
pub mod chat;

/// Activity offers
pub mod activity;

/// Daily match lists
pub mod matching;

/// Authentication and user management
pub mod auth;

/// Outgoing mail
pub mod mail;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
pub use store::{KvStore, MemoryStore, PgStore, Table};
