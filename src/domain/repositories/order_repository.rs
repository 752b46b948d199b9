use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::RepositoryResult;

/// Ad campaign order row
///
/// No cross-field validation is enforced between dates, budget, and the
/// estimate columns.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AdOrder {
    pub id: String,
    pub created: i64,
    pub start_date: String,
    pub end_date: String,
    pub campaign_name: String,
    pub budget: f64,
    pub days: i64,
    pub platform: String,
    pub objective: String,
    pub auction: String,
    pub estimated_impression: i64,
    pub estimated_click: i64,
    pub estimated_ctr: f64,
}

/// Caller-supplied order fields, shared by CREATE and UPDATE
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub start_date: String,
    pub end_date: String,
    pub campaign_name: String,
    pub budget: f64,
    pub days: i64,
    pub platform: String,
    pub objective: String,
    pub auction: String,
    pub estimated_impression: i64,
    pub estimated_click: i64,
    pub estimated_ctr: f64,
}

/// Repository trait for AdOrder records
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> RepositoryResult<Vec<AdOrder>>;

    async fn create(&self, order: &AdOrder) -> RepositoryResult<()>;

    async fn update(&self, id: &str, draft: &OrderDraft) -> RepositoryResult<()>;

    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<AdOrder>>;
}
