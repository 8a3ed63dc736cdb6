//! Mutual-Engagement Detector
//!
//! A conversation is mutual once both participants have written at least one
//! message. System messages don't count.
//!
//! The detector keeps no state: it rescans the message log each time, which
//! is linear in the history length. Whether a mutual result is the *first*
//! one is decided by the caller, by checking for an existing activity offer.

use std::collections::HashSet;

use crate::shared::messaging::ConversationRecord;

/// How far a conversation has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    /// Nobody has written yet
    Silent,
    /// Only one participant has written
    OneSided,
    /// Both participants have written
    Mutual,
}

pub fn assess(record: &ConversationRecord) -> Engagement {
    let senders: HashSet<&str> = record
        .messages
        .iter()
        .filter_map(|message| message.sender.user_id())
        .collect();

    match senders.len() {
        0 => Engagement::Silent,
        1 => Engagement::OneSided,
        _ => Engagement::Mutual,
    }
}

pub fn is_mutual(record: &ConversationRecord) -> bool {
    assess(record) == Engagement::Mutual
}
