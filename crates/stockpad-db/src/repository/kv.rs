//! # Key-Value Repository
//!
//! SQLite implementation of [`KeyValueStore`] on the `kv_store` table.
//!
//! ## Upsert
//! ```text
//! set("products", json)
//!      │
//!      ▼
//! INSERT ... ON CONFLICT(key) DO UPDATE
//!      │
//!      ├── key absent  → new row
//!      └── key present → value and updated_at replaced
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::kv::KeyValueStore;

/// Repository for the `kv_store` table.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.kv();
/// repo.set("products", "[]").await?;
/// let raw = repo.get("products").await?;
/// ```
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }
}

impl KeyValueStore for KvRepository {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading key");

        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing key");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> KvRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.kv()
    }

    async fn row_count(repo: &KvRepository) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let repo = repo().await;
        assert_eq!(repo.get("products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let repo = repo().await;

        repo.set("products", "[]").await.unwrap();
        repo.set("products", r#"[{"imageRef":"a","name":"b","amount":"c"}]"#)
            .await
            .unwrap();

        assert_eq!(
            repo.get("products").await.unwrap().as_deref(),
            Some(r#"[{"imageRef":"a","name":"b","amount":"c"}]"#)
        );
        assert_eq!(row_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let repo = repo().await;

        repo.set("products", "[]").await.unwrap();
        repo.set("imageRef", "file:///a.jpg").await.unwrap();

        assert_eq!(repo.get("products").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(
            repo.get("imageRef").await.unwrap().as_deref(),
            Some("file:///a.jpg")
        );
    }
}
