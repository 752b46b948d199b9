use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extractors::ApiJson;
use crate::api::handlers::MessageResponse;
use crate::api::AppState;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::order_repository::{AdOrder, OrderDraft};
use crate::domain::repositories::OrderRepository;
use crate::infrastructure::repositories::SqliteOrderRepository;

/// Request body for creating or updating an ad order
///
/// Every field is required; a body missing any of them is rejected
/// before the store is touched. Campaign name, dates, and budget must
/// additionally be non-empty (a zero budget counts as missing).
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
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

impl From<OrderPayload> for OrderDraft {
    fn from(req: OrderPayload) -> Self {
        Self {
            start_date: req.start_date,
            end_date: req.end_date,
            campaign_name: req.campaign_name,
            budget: req.budget,
            days: req.days,
            platform: req.platform,
            objective: req.objective,
            auction: req.auction,
            estimated_impression: req.estimated_impression,
            estimated_click: req.estimated_click,
            estimated_ctr: req.estimated_ctr,
        }
    }
}

/// Required set for CREATE and UPDATE: campaign name, both dates, and a
/// non-zero budget. Empty strings count as missing.
fn require_order_fields(req: &OrderPayload) -> Result<(), ApiError> {
    if req.campaign_name.is_empty()
        || req.start_date.is_empty()
        || req.end_date.is_empty()
        || req.budget == 0.0
    {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    Ok(())
}

/// List all ad orders
///
/// GET /api/ads-orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<AdOrder>>, ApiError> {
    let repo = SqliteOrderRepository::new(state.pool.clone());
    let orders = repo.list().await?;

    Ok(Json(orders))
}

/// Create a new ad order
///
/// POST /api/ads-orders
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OrderPayload>,
) -> Result<(StatusCode, Json<AdOrder>), ApiError> {
    require_order_fields(&req)?;

    let order = AdOrder {
        id: Uuid::new_v4().to_string(),
        created: Utc::now().timestamp_millis(),
        start_date: req.start_date,
        end_date: req.end_date,
        campaign_name: req.campaign_name,
        budget: req.budget,
        days: req.days,
        platform: req.platform,
        objective: req.objective,
        auction: req.auction,
        estimated_impression: req.estimated_impression,
        estimated_click: req.estimated_click,
        estimated_ctr: req.estimated_ctr,
    };

    let repo = SqliteOrderRepository::new(state.pool.clone());
    repo.create(&order).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an ad order by id
///
/// PUT /api/ads-orders/:id
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<OrderPayload>,
) -> Result<Json<AdOrder>, ApiError> {
    require_order_fields(&req)?;

    let repo = SqliteOrderRepository::new(state.pool.clone());
    repo.update(&id, &req.into()).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("Ads order not found: {}", id)),
        other => other.into(),
    })?;

    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Ads order not found: {}", id)))?;

    Ok(Json(order))
}

/// Delete an ad order by id
///
/// DELETE /api/ads-orders/:id
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = SqliteOrderRepository::new(state.pool.clone());
    repo.delete(&id).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("Ads order not found: {}", id)),
        other => other.into(),
    })?;

    Ok(Json(MessageResponse::new("Ads order deleted successfully")))
}
