use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::order_repository::{AdOrder, OrderDraft, OrderRepository};

/// SQLite implementation of OrderRepository
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Creates a new SqliteOrderRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn classify_missed_write(&self, id: &str) -> RepositoryResult<RepositoryError> {
        Ok(match self.find_by_id(id).await? {
            None => RepositoryError::NotFound,
            Some(_) => RepositoryError::WriteRejected,
        })
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn list(&self) -> RepositoryResult<Vec<AdOrder>> {
        let orders = sqlx::query_as::<_, AdOrder>(
            "SELECT id, created, start_date, end_date, campaign_name, budget, days,
                    platform, objective, auction,
                    estimated_impression, estimated_click, estimated_ctr
             FROM ads_orders ORDER BY created",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn create(&self, order: &AdOrder) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO ads_orders (id, created, start_date, end_date, campaign_name,
                                     budget, days, platform, objective, auction,
                                     estimated_impression, estimated_click, estimated_ctr)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&order.id)
        .bind(order.created)
        .bind(&order.start_date)
        .bind(&order.end_date)
        .bind(&order.campaign_name)
        .bind(order.budget)
        .bind(order.days)
        .bind(&order.platform)
        .bind(&order.objective)
        .bind(&order.auction)
        .bind(order.estimated_impression)
        .bind(order.estimated_click)
        .bind(order.estimated_ctr)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, id: &str, draft: &OrderDraft) -> RepositoryResult<()> {
        let result = sqlx::query(
            "UPDATE ads_orders
             SET start_date = ?, end_date = ?, campaign_name = ?, budget = ?, days = ?,
                 platform = ?, objective = ?, auction = ?,
                 estimated_impression = ?, estimated_click = ?, estimated_ctr = ?
             WHERE id = ?",
        )
        .bind(&draft.start_date)
        .bind(&draft.end_date)
        .bind(&draft.campaign_name)
        .bind(draft.budget)
        .bind(draft.days)
        .bind(&draft.platform)
        .bind(&draft.objective)
        .bind(&draft.auction)
        .bind(draft.estimated_impression)
        .bind(draft.estimated_click)
        .bind(draft.estimated_ctr)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM ads_orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<AdOrder>> {
        let order = sqlx::query_as::<_, AdOrder>(
            "SELECT id, created, start_date, end_date, campaign_name, budget, days,
                    platform, objective, auction,
                    estimated_impression, estimated_click, estimated_ctr
             FROM ads_orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }
}
