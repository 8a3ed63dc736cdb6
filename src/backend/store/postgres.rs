//! Postgres key-value store
//!
//! All logical tables share the `kv_items` relation created by the
//! migrations in `migrations/`. Items are stored as JSON text.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Item, KvStore, StoreError, StoreResult, Table};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self::new(pool))
    }

    fn decode_row(table: Table, key: &str, raw: &str) -> StoreResult<Item> {
        serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
            table: table.name(),
            key: key.to_string(),
            source,
        })
    }
}

#[async_trait]
impl KvStore for PgStore {
    async fn get(&self, table: Table, key: &str) -> StoreResult<Option<Item>> {
        let raw = sqlx::query_scalar::<_, String>(
            r#"
            SELECT item FROM kv_items
            WHERE table_name = $1 AND item_key = $2
            "#,
        )
        .bind(table.name())
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(|raw| Self::decode_row(table, key, &raw)).transpose()
    }

    async fn put(&self, table: Table, key: &str, item: Item) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_items (table_name, item_key, item, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (table_name, item_key)
            DO UPDATE SET item = EXCLUDED.item, updated_at = NOW()
            "#,
        )
        .bind(table.name())
        .bind(key)
        .bind(item.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn put_if_absent(&self, table: Table, key: &str, item: Item) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO kv_items (table_name, item_key, item, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (table_name, item_key) DO NOTHING
            "#,
        )
        .bind(table.name())
        .bind(key)
        .bind(item.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, table: Table, key: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            DELETE FROM kv_items
            WHERE table_name = $1 AND item_key = $2
            "#,
        )
        .bind(table.name())
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // TODO: page through the table with a keyset cursor once the user table outgrows one query.
    async fn scan(&self, table: Table) -> StoreResult<Vec<(String, Item)>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT item_key, item FROM kv_items
            WHERE table_name = $1
            ORDER BY item_key
            "#,
        )
        .bind(table.name())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(key, raw)| {
                let item = Self::decode_row(table, &key, &raw)?;
                Ok((key, item))
            })
            .collect()
    }
}
