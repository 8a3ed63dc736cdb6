//! Conversation Data Structures
//!
//! A conversation between two users is addressed by a [`ConversationKey`]
//! built from both identifiers in lexicographic order, so either participant
//! resolves the same record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::message::{ChatMessage, Sender, SYSTEM_SENDER};
use crate::shared::error::SharedError;

/// Separator between the two identifiers of a conversation key.
pub const KEY_DELIMITER: &str = "---";

/// Check that `user_id` can take part in a conversation key.
pub fn validate_user_id(field: &str, user_id: &str) -> Result<(), SharedError> {
    if user_id.trim().is_empty() {
        return Err(SharedError::validation(field, "identifier cannot be empty"));
    }
    if user_id.contains(KEY_DELIMITER) {
        return Err(SharedError::validation(
            field,
            format!("identifier cannot contain '{}'", KEY_DELIMITER),
        ));
    }
    if user_id.starts_with('-') || user_id.ends_with('-') {
        return Err(SharedError::validation(
            field,
            "identifier cannot start or end with '-'",
        ));
    }
    if user_id == SYSTEM_SENDER {
        return Err(SharedError::validation(field, "identifier is reserved"));
    }
    Ok(())
}

/// Position of a participant inside a conversation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// Canonical address of a two-party conversation
///
/// Serialized as `"{first}---{second}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationKey {
    first: String,
    second: String,
}

impl ConversationKey {
    /// Resolve the key shared by `user_a` and `user_b`
    ///
    /// `resolve(a, b) == resolve(b, a)` for every valid pair.
    pub fn resolve(user_a: &str, user_b: &str) -> Result<Self, SharedError> {
        validate_user_id("user", user_a)?;
        validate_user_id("target", user_b)?;
        if user_a == user_b {
            return Err(SharedError::validation(
                "target",
                "cannot start a conversation with yourself",
            ));
        }

        let (first, second) = if user_a < user_b {
            (user_a, user_b)
        } else {
            (user_b, user_a)
        };

        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Parse a serialized key, rejecting non-canonical forms
    pub fn parse(raw: &str) -> Result<Self, SharedError> {
        let (a, b) = raw.split_once(KEY_DELIMITER).ok_or_else(|| {
            SharedError::validation("key", format!("missing '{}' delimiter", KEY_DELIMITER))
        })?;
        let key = Self::resolve(a, b)?;
        if key.first != a {
            return Err(SharedError::validation(
                "key",
                "participants are not in canonical order",
            ));
        }
        Ok(key)
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn participant(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    pub fn slot_of(&self, user_id: &str) -> Option<Slot> {
        if user_id == self.first {
            Some(Slot::First)
        } else if user_id == self.second {
            Some(Slot::Second)
        } else {
            None
        }
    }

    /// The other participant, from `user_id`'s point of view
    pub fn counterpart(&self, user_id: &str) -> Option<&str> {
        self.slot_of(user_id).map(|slot| self.participant(slot.other()))
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, KEY_DELIMITER, self.second)
    }
}

impl TryFrom<String> for ConversationKey {
    type Error = SharedError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ConversationKey> for String {
    fn from(key: ConversationKey) -> Self {
        key.to_string()
    }
}

/// Stored message history between two users
///
/// Read flags are kept per slot; the key records which identifier occupies
/// which slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub key: ConversationKey,
    pub first_read: bool,
    pub second_read: bool,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ConversationRecord {
    /// A conversation nobody has written to yet
    pub fn empty(key: ConversationKey) -> Self {
        Self {
            key,
            first_read: false,
            second_read: false,
            messages: Vec::new(),
        }
    }

    pub fn is_read(&self, slot: Slot) -> bool {
        match slot {
            Slot::First => self.first_read,
            Slot::Second => self.second_read,
        }
    }

    pub fn is_read_by(&self, user_id: &str) -> Option<bool> {
        self.key.slot_of(user_id).map(|slot| self.is_read(slot))
    }

    pub fn set_read(&mut self, slot: Slot, read: bool) {
        match slot {
            Slot::First => self.first_read = read,
            Slot::Second => self.second_read = read,
        }
    }

    /// Append a message to the log
    ///
    /// A participant's message is read by its sender and unread by the
    /// recipient. System messages leave the flags as they are.
    pub fn push(&mut self, message: ChatMessage) {
        if let Sender::User(sender) = &message.sender {
            if let Some(slot) = self.key.slot_of(sender) {
                self.set_read(slot, true);
                self.set_read(slot.other(), false);
            }
        }
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// One row of a user's chat list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// The other participant
    pub email: String,
    /// The other participant's display name, if their profile has one
    pub name: Option<String>,
    /// Body of the last message
    pub message: String,
    /// Whether the requesting user has read the latest message
    pub read: bool,
    /// Timestamp of the last message
    pub timestamp: String,
}
