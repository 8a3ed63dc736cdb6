//! Chat Message Data Structure
//!
//! Represents a single entry in a conversation's append-only message log.

use serde::{Deserialize, Serialize};

use super::conversation::ConversationKey;

/// Reserved sender identifier for system-generated messages.
///
/// Never a legal user identifier, so a system message can't be confused
/// with one written by a participant.
pub const SYSTEM_SENDER: &str = "0";

/// Author of a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    /// A participant, identified by email
    User(String),
    /// The backend itself (activity offers)
    System,
}

impl Sender {
    /// The participant identifier, or `None` for system messages
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Sender::User(id) => Some(id),
            Sender::System => None,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl From<String> for Sender {
    fn from(raw: String) -> Self {
        if raw == SYSTEM_SENDER {
            Sender::System
        } else {
            Sender::User(raw)
        }
    }
}

impl From<Sender> for String {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User(id) => id,
            Sender::System => SYSTEM_SENDER.to_string(),
        }
    }
}

/// Represents a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message
    #[serde(rename = "sender_email")]
    pub sender: Sender,
    /// Message text; for system messages, the activity identifier
    #[serde(rename = "message")]
    pub body: String,
    /// When the message was sent (RFC3339 string, or as supplied by the client)
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a message written by a participant
    ///
    /// Falls back to the current server time when the client did not
    /// supply a timestamp.
    pub fn from_user(sender: impl Into<String>, body: impl Into<String>, timestamp: Option<String>) -> Self {
        Self {
            sender: Sender::User(sender.into()),
            body: body.into(),
            timestamp: timestamp.unwrap_or_else(now),
        }
    }

    /// Create the system message announcing an activity offer
    pub fn activity_offer(activity_id: &ConversationKey) -> Self {
        Self {
            sender: Sender::System,
            body: activity_id.to_string(),
            timestamp: now(),
        }
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Request body for sending a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Result data of a successful send
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    /// Set when this message triggered a new activity offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<ConversationKey>,
}

/// Query parameters for reading a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesQuery {
    pub target_user_email: String,
}
