//! In-memory key-value store
//!
//! Backed by a `BTreeMap` behind a tokio `RwLock`, so scans come back in
//! key order just like the Postgres store.

use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Item, KvStore, StoreResult, Table};

#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<BTreeMap<(Table, String), Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in a table
    pub async fn count(&self, table: Table) -> usize {
        self.items
            .read()
            .await
            .keys()
            .filter(|(t, _)| *t == table)
            .count()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, table: Table, key: &str) -> StoreResult<Option<Item>> {
        Ok(self.items.read().await.get(&(table, key.to_string())).cloned())
    }

    async fn put(&self, table: Table, key: &str, item: Item) -> StoreResult<()> {
        self.items.write().await.insert((table, key.to_string()), item);
        Ok(())
    }

    async fn put_if_absent(&self, table: Table, key: &str, item: Item) -> StoreResult<bool> {
        let mut items = self.items.write().await;
        match items.entry((table, key.to_string())) {
            Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(true)
            }
            Entry::Occupied(_) => Ok(false),
        }
    }

    async fn delete(&self, table: Table, key: &str) -> StoreResult<()> {
        self.items.write().await.remove(&(table, key.to_string()));
        Ok(())
    }

    async fn scan(&self, table: Table) -> StoreResult<Vec<(String, Item)>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|((t, _), _)| *t == table)
            .map(|((_, key), item)| (key.clone(), item.clone()))
            .collect())
    }
}
