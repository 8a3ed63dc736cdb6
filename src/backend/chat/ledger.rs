/**
 * Conversation Ledger
 *
 * Stores two-party conversations in the `message` table. Each conversation
 * record is keyed by its canonical conversation key; each user additionally
 * owns an index record (keyed by their email) listing the conversations they
 * take part in, in the order they joined them.
 *
 * # Invariants
 *
 * - Every operation addresses a conversation through `ConversationKey`,
 *   which is built by `resolve_key`. Keys are never assembled by hand.
 * - Loading a conversation that was never written returns an empty record.
 * - A user's index holds each key at most once.
 */

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::store::{self, KvStore, StoreResult, Table};
use crate::shared::messaging::{
    ChatMessage, ConversationKey, ConversationRecord, ConversationSummary,
};
use crate::shared::SharedError;

/// The conversations a user takes part in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIndex {
    pub key: String,
    #[serde(rename = "message_history_keys", default)]
    pub conversations: Vec<ConversationKey>,
}

impl UserIndex {
    pub fn empty(user_id: &str) -> Self {
        Self {
            key: user_id.to_string(),
            conversations: Vec::new(),
        }
    }

    /// Add `key` unless it is already listed; returns whether it was added
    pub fn insert(&mut self, key: &ConversationKey) -> bool {
        if self.conversations.contains(key) {
            return false;
        }
        self.conversations.push(key.clone());
        true
    }
}

#[derive(Clone)]
pub struct ConversationLedger {
    store: Arc<dyn KvStore>,
}

impl ConversationLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Canonical key for the conversation between two users
    pub fn resolve_key(user_a: &str, user_b: &str) -> Result<ConversationKey, SharedError> {
        ConversationKey::resolve(user_a, user_b)
    }

    /// Load a conversation, or an empty one if nothing was written yet
    pub async fn load(&self, key: &ConversationKey) -> StoreResult<ConversationRecord> {
        let record: Option<ConversationRecord> =
            store::load(self.store.as_ref(), Table::Message, &key.to_string()).await?;
        Ok(record.unwrap_or_else(|| ConversationRecord::empty(key.clone())))
    }

    /// Append a message and persist the updated record
    ///
    /// The sender's read flag is set and the other participant's is cleared.
    pub async fn append_message(
        &self,
        key: &ConversationKey,
        message: ChatMessage,
    ) -> StoreResult<ConversationRecord> {
        let mut record = self.load(key).await?;
        record.push(message);
        store::save(self.store.as_ref(), Table::Message, &key.to_string(), &record).await?;
        tracing::debug!("Appended message to {} ({} total)", key, record.messages.len());
        Ok(record)
    }

    /// Mark the conversation read for `reader`
    ///
    /// Only writes when the reader's flag was still clear. Readers outside
    /// the conversation are ignored.
    pub async fn mark_read(
        &self,
        key: &ConversationKey,
        reader: &str,
    ) -> StoreResult<ConversationRecord> {
        let mut record = self.load(key).await?;
        let Some(slot) = key.slot_of(reader) else {
            tracing::warn!("{} is not a participant of {}", reader, key);
            return Ok(record);
        };

        if !record.is_read(slot) {
            record.set_read(slot, true);
            store::save(self.store.as_ref(), Table::Message, &key.to_string(), &record).await?;
        }
        Ok(record)
    }

    pub async fn load_index(&self, user_id: &str) -> StoreResult<UserIndex> {
        let index: Option<UserIndex> =
            store::load(self.store.as_ref(), Table::Message, user_id).await?;
        Ok(index.unwrap_or_else(|| UserIndex::empty(user_id)))
    }

    /// Make sure `key` is listed in `user_id`'s index
    pub async fn register_participant(
        &self,
        user_id: &str,
        key: &ConversationKey,
    ) -> StoreResult<()> {
        let mut index = self.load_index(user_id).await?;
        if index.insert(key) {
            store::save(self.store.as_ref(), Table::Message, user_id, &index).await?;
        }
        Ok(())
    }

    /// Summaries of `user_id`'s conversations, in index order
    ///
    /// Display names are left empty; callers that know the user directory
    /// fill them in.
    pub async fn list_conversations(&self, user_id: &str) -> StoreResult<Vec<ConversationSummary>> {
        let index = self.load_index(user_id).await?;
        let mut summaries = Vec::with_capacity(index.conversations.len());

        for key in &index.conversations {
            let record = self.load(key).await?;
            let (Some(last), Some(counterpart), Some(read)) = (
                record.last_message(),
                key.counterpart(user_id),
                record.is_read_by(user_id),
            ) else {
                tracing::warn!("Skipping conversation {} in index of {}", key, user_id);
                continue;
            };

            summaries.push(ConversationSummary {
                email: counterpart.to_string(),
                name: None,
                message: last.body.clone(),
                read,
                timestamp: last.timestamp.clone(),
            });
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::MemoryStore;
    use pretty_assertions::assert_eq;

    const ALICE: &str = "alice@x.io";
    const BOB: &str = "bob@x.io";

    fn ledger() -> ConversationLedger {
        ConversationLedger::new(Arc::new(MemoryStore::new()))
    }

    fn key() -> ConversationKey {
        ConversationLedger::resolve_key(BOB, ALICE).unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_returns_empty_record() {
        let record = ledger().load(&key()).await.unwrap();
        assert_eq!(record, ConversationRecord::empty(key()));
    }

    #[tokio::test]
    async fn test_append_persists_and_flips_flags() {
        let ledger = ledger();
        let key = key();

        ledger
            .append_message(&key, ChatMessage::from_user(ALICE, "hi", None))
            .await
            .unwrap();
        let record = ledger
            .append_message(&key, ChatMessage::from_user(BOB, "hello", None))
            .await
            .unwrap();

        assert_eq!(record.is_read_by(BOB), Some(true));
        assert_eq!(record.is_read_by(ALICE), Some(false));
        assert_eq!(ledger.load(&key).await.unwrap(), record);
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent() {
        let ledger = ledger();
        let key = key();
        ledger
            .append_message(&key, ChatMessage::from_user(ALICE, "hi", None))
            .await
            .unwrap();

        let once = ledger.mark_read(&key, BOB).await.unwrap();
        let twice = ledger.mark_read(&key, BOB).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.is_read_by(BOB), Some(true));
    }

    #[tokio::test]
    async fn test_mark_read_ignores_outsiders() {
        let ledger = ledger();
        let record = ledger.mark_read(&key(), "carol@x.io").await.unwrap();
        assert_eq!(record, ConversationRecord::empty(key()));
    }

    #[tokio::test]
    async fn test_register_participant_is_idempotent() {
        let ledger = ledger();
        let key = key();
        ledger.register_participant(ALICE, &key).await.unwrap();
        ledger.register_participant(ALICE, &key).await.unwrap();

        let index = ledger.load_index(ALICE).await.unwrap();
        assert_eq!(index.conversations, vec![key]);
    }

    #[tokio::test]
    async fn test_index_serializes_history_keys() {
        let mut index = UserIndex::empty(ALICE);
        index.insert(&key());
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["message_history_keys"][0], "alice@x.io---bob@x.io");
    }

    #[tokio::test]
    async fn test_list_conversations_follows_index_order() {
        let ledger = ledger();
        let with_bob = key();
        let with_carol = ConversationLedger::resolve_key(ALICE, "carol@x.io").unwrap();

        for (key, other) in [(&with_carol, "carol@x.io"), (&with_bob, BOB)] {
            ledger
                .append_message(key, ChatMessage::from_user(other, "ping", Some("t1".to_string())))
                .await
                .unwrap();
            ledger.register_participant(ALICE, key).await.unwrap();
        }
        ledger
            .append_message(&with_bob, ChatMessage::from_user(ALICE, "pong", Some("t2".to_string())))
            .await
            .unwrap();

        let summaries = ledger.list_conversations(ALICE).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].email, "carol@x.io");
        assert!(!summaries[0].read);
        assert_eq!(summaries[1].email, BOB);
        assert_eq!(summaries[1].message, "pong");
        assert_eq!(summaries[1].timestamp, "t2");
        assert!(summaries[1].read);
    }

    #[tokio::test]
    async fn test_list_conversations_skips_empty_records() {
        let ledger = ledger();
        ledger.register_participant(ALICE, &key()).await.unwrap();
        assert!(ledger.list_conversations(ALICE).await.unwrap().is_empty());
    }
}
