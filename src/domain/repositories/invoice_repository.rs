use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

/// Invoice row
///
/// `transaction_id` is not enforced unique; `attachments` is an opaque
/// string (typically a URI).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: String,
    pub date: String,
    pub month: String,
    pub transaction_id: String,
    pub platform: String,
    pub attachments: String,
}

/// Caller-supplied invoice fields, shared by CREATE and UPDATE
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub date: String,
    pub month: String,
    pub transaction_id: String,
    pub platform: String,
    pub attachments: String,
}

/// Repository trait for Invoice records
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<Invoice>>;

    async fn create(&self, invoice: &Invoice) -> RepositoryResult<()>;

    async fn update(&self, id: &str, draft: &InvoiceDraft) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Invoice>>;
}
