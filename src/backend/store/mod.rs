//! Key-Value Store Module
//!
//! Every entity kind lives in its own logical table and is addressed by a
//! single string key. Items are JSON documents; the typed helpers in this
//! module convert them to and from the domain types.
//!
//! # Implementations
//!
//! - **`MemoryStore`** - In-process map, used for tests and local runs
//! - **`PgStore`** - Postgres-backed store (one `kv_items` relation)
//!
//! # Consistency
//!
//! Writes are last-writer-wins. `put_if_absent` is the only conditional
//! write and is what keeps activity generation at-most-once per key.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A stored JSON document
pub type Item = serde_json::Value;

/// Logical tables, one per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    /// User profiles, keyed by email
    User,
    /// Conversation records and per-user conversation indexes
    Message,
    /// Activity offers, keyed by conversation key
    Activity,
    /// Daily match lists, keyed by email
    Match,
    /// Short-lived verification codes
    Cache,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::User => "user",
            Table::Message => "message",
            Table::Activity => "activity",
            Table::Match => "match",
            Table::Cache => "cache",
        }
    }
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt item '{key}' in table '{table}': {source}")]
    Corrupt {
        table: &'static str,
        key: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode item '{key}' for table '{table}': {source}")]
    Encode {
        table: &'static str,
        key: String,
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Table-scoped key-value storage
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch an item by key
    async fn get(&self, table: Table, key: &str) -> StoreResult<Option<Item>>;

    /// Create or overwrite an item
    async fn put(&self, table: Table, key: &str, item: Item) -> StoreResult<()>;

    /// Create an item only if the key is unused
    ///
    /// Returns `false` when an item already existed; it is left untouched.
    async fn put_if_absent(&self, table: Table, key: &str, item: Item) -> StoreResult<bool>;

    /// Remove an item; missing keys are ignored
    async fn delete(&self, table: Table, key: &str) -> StoreResult<()>;

    /// All items of a table, in ascending key order
    async fn scan(&self, table: Table) -> StoreResult<Vec<(String, Item)>>;
}

fn decode<T: DeserializeOwned>(table: Table, key: &str, item: Item) -> StoreResult<T> {
    serde_json::from_value(item).map_err(|source| StoreError::Corrupt {
        table: table.name(),
        key: key.to_string(),
        source,
    })
}

fn encode<T: Serialize + ?Sized>(table: Table, key: &str, value: &T) -> StoreResult<Item> {
    serde_json::to_value(value).map_err(|source| StoreError::Encode {
        table: table.name(),
        key: key.to_string(),
        source,
    })
}

/// Fetch and decode an item
pub async fn load<T: DeserializeOwned>(
    store: &dyn KvStore,
    table: Table,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.get(table, key).await? {
        Some(item) => decode(table, key, item).map(Some),
        None => Ok(None),
    }
}

/// Encode and write an item
pub async fn save<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    table: Table,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let item = encode(table, key, value)?;
    store.put(table, key, item).await
}

/// Encode and write an item unless the key is taken
pub async fn create<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    table: Table,
    key: &str,
    value: &T,
) -> StoreResult<bool> {
    let item = encode(table, key, value)?;
    store.put_if_absent(table, key, item).await
}

/// Decode every item of a table that matches `T`
///
/// Items that fail to decode are skipped with a warning.
pub async fn scan_as<T: DeserializeOwned>(store: &dyn KvStore, table: Table) -> StoreResult<Vec<T>> {
    let items = store.scan(table).await?;
    let mut decoded = Vec::with_capacity(items.len());
    for (key, item) in items {
        match decode(table, &key, item) {
            Ok(value) => decoded.push(value),
            Err(e) => tracing::warn!("Skipping item during scan: {}", e),
        }
    }
    Ok(decoded)
}
