//! Chat Backend Module
//!
//! This module contains all server-side chat functionality:
//! - Conversation storage (message logs, read flags, per-user indexes)
//! - Mutual-engagement detection
//! - Chat entry points and HTTP handlers
//!
//! # Architecture
//!
//! - **`ledger`** - Conversation records and user indexes over the store
//! - **`detector`** - Decides whether both participants have written
//! - **`service`** - `list_chats`, `get_messages`, `send_message`
//! - **`handlers`** - HTTP handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mulberry::backend::chat::ledger::ConversationLedger;
//! use mulberry::backend::store::MemoryStore;
//! use mulberry::shared::messaging::ChatMessage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = ConversationLedger::new(Arc::new(MemoryStore::new()));
//! let key = ConversationLedger::resolve_key("a@x.io", "b@x.io")?;
//! let record = ledger
//!     .append_message(&key, ChatMessage::from_user("a@x.io", "Hello!", None))
//!     .await?;
//! assert_eq!(record.is_read_by("b@x.io"), Some(false));
//! # Ok(())
//! # }
//! ```

/// Conversation storage
pub mod ledger;

/// Mutual-engagement detection
pub mod detector;

/// Chat entry points
pub mod service;

/// HTTP handlers
pub mod handlers;

/// Re-export commonly used types
pub use detector::{assess, is_mutual, Engagement};
pub use ledger::{ConversationLedger, UserIndex};
pub use service::ChatService;
