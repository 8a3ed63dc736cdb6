//! Messaging Module
//!
//! This module contains the data structures for the chat system:
//!
//! - `ConversationKey` - Canonical address of a two-party conversation
//! - `ConversationRecord` - Ordered message log plus per-participant read flags
//! - `ChatMessage` - A message in a conversation
//! - `ConversationSummary` - One row of a user's chat list
//!
//! # Usage
//!
//! ```rust
//! use mulberry::shared::messaging::{ChatMessage, ConversationKey, ConversationRecord};
//!
//! let key = ConversationKey::resolve("b@x.io", "a@x.io").unwrap();
//! let mut record = ConversationRecord::empty(key);
//! record.push(ChatMessage::from_user("a@x.io", "hello", None));
//! assert_eq!(record.is_read_by("b@x.io"), Some(false));
//! ```

pub mod conversation;
pub mod message;

pub use conversation::{
    validate_user_id, ConversationKey, ConversationRecord, ConversationSummary, Slot,
    KEY_DELIMITER,
};
pub use message::{
    ChatMessage, MessagesQuery, SendMessageRequest, SendReceipt, Sender, SYSTEM_SENDER,
};
