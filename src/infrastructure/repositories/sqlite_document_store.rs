use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::document_repository::DocumentStore;

/// SQLite-backed key-value document store
///
/// A `put` is a single upsert statement, so whole-document replacement
/// is atomic without an explicit transaction.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Creates a new SqliteDocumentStore
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_documents WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO kv_documents (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
