use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extractors::ApiJson;
use crate::api::handlers::MessageResponse;
use crate::api::AppState;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::invoice_repository::{Invoice, InvoiceDraft};
use crate::domain::repositories::InvoiceRepository;
use crate::infrastructure::repositories::SqliteInvoiceRepository;

/// Request body for creating or updating an invoice
///
/// All fields are required; date, month, transaction id, and platform
/// must additionally be non-empty.
#[derive(Debug, Deserialize)]
pub struct InvoicePayload {
    pub date: String,
    pub month: String,
    pub transaction_id: String,
    pub platform: String,
    pub attachments: String,
}

impl From<InvoicePayload> for InvoiceDraft {
    fn from(req: InvoicePayload) -> Self {
        Self {
            date: req.date,
            month: req.month,
            transaction_id: req.transaction_id,
            platform: req.platform,
            attachments: req.attachments,
        }
    }
}

/// Required set for CREATE and UPDATE: date, month, transaction id, and
/// platform, all non-empty. Empty strings count as missing.
fn require_invoice_fields(req: &InvoicePayload) -> Result<(), ApiError> {
    if req.date.is_empty()
        || req.month.is_empty()
        || req.transaction_id.is_empty()
        || req.platform.is_empty()
    {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    Ok(())
}

/// List all invoices
///
/// GET /api/invoices
pub async fn list_invoices(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let repo = SqliteInvoiceRepository::new(state.pool.clone());
    let invoices = repo.list().await?;

    Ok(Json(invoices))
}

/// Create a new invoice
///
/// POST /api/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<InvoicePayload>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    require_invoice_fields(&req)?;

    let invoice = Invoice {
        id: Uuid::new_v4().to_string(),
        date: req.date,
        month: req.month,
        transaction_id: req.transaction_id,
        platform: req.platform,
        attachments: req.attachments,
    };

    let repo = SqliteInvoiceRepository::new(state.pool.clone());
    repo.create(&invoice).await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// Update an invoice by id
///
/// PUT /api/invoices/:id
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<InvoicePayload>,
) -> Result<Json<Invoice>, ApiError> {
    require_invoice_fields(&req)?;

    let repo = SqliteInvoiceRepository::new(state.pool.clone());
    repo.update(&id, &req.into()).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("Invoice not found: {}", id)),
        other => other.into(),
    })?;

    let invoice = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Invoice not found: {}", id)))?;

    Ok(Json(invoice))
}

/// Delete an invoice by id
///
/// DELETE /api/invoices/:id
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = SqliteInvoiceRepository::new(state.pool.clone());
    repo.delete(&id).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("Invoice not found: {}", id)),
        other => other.into(),
    })?;

    Ok(Json(MessageResponse::new("Invoice deleted successfully")))
}
