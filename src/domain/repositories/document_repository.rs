use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;

/// Key-value store for whole JSON documents
///
/// `put` replaces the entire stored value atomically; there is no merge
/// and no conflict detection (last writer wins).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the raw document under `key`, if one has ever been stored
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>>;

    /// Replace the document under `key` with `value`
    async fn put(&self, key: &str, value: &str) -> RepositoryResult<()>;
}
