use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::invoice_repository::{Invoice, InvoiceDraft, InvoiceRepository};

/// SQLite implementation of InvoiceRepository
pub struct SqliteInvoiceRepository {
    pool: SqlitePool,
}

impl SqliteInvoiceRepository {
    /// Creates a new SqliteInvoiceRepository
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
impl InvoiceRepository for SqliteInvoiceRepository {
    async fn list(&self) -> RepositoryResult<Vec<Invoice>> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, date, month, transaction_id, platform, attachments
             FROM invoices ORDER BY date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn create(&self, invoice: &Invoice) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO invoices (id, date, month, transaction_id, platform, attachments)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&invoice.id)
        .bind(&invoice.date)
        .bind(&invoice.month)
        .bind(&invoice.transaction_id)
        .bind(&invoice.platform)
        .bind(&invoice.attachments)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, id: &str, draft: &InvoiceDraft) -> RepositoryResult<()> {
        let result = sqlx::query(
            "UPDATE invoices
             SET date = ?, month = ?, transaction_id = ?, platform = ?, attachments = ?
             WHERE id = ?",
        )
        .bind(&draft.date)
        .bind(&draft.month)
        .bind(&draft.transaction_id)
        .bind(&draft.platform)
        .bind(&draft.attachments)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, date, month, transaction_id, platform, attachments
             FROM invoices WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }
}
