use axum::{extract::State, Json};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::extractors::ApiJson;
use crate::api::handlers::MessageResponse;
use crate::api::AppState;
use crate::domain::repositories::DocumentStore;
use crate::infrastructure::repositories::SqliteDocumentStore;

/// Storage key for the exchange-rate table document
const EXCHANGE_RATES_KEY: &str = "ads_exchange_rate_table";

/// Storage key for the report-sync state document
const REPORT_SYNC_KEY: &str = "ads_report_sync_key_value";

/// Get the full exchange-rate document
///
/// GET /api/ads-exchange-rates
///
/// Defaults to an empty array when nothing has ever been stored.
pub async fn get_exchange_rates(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    read_document(&state, EXCHANGE_RATES_KEY, Value::Array(Vec::new())).await
}

/// Replace the full exchange-rate document
///
/// POST /api/ads-exchange-rates
pub async fn replace_exchange_rates(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<MessageResponse>, ApiError> {
    replace_document(&state, EXCHANGE_RATES_KEY, &body).await?;

    Ok(Json(MessageResponse::new(
        "Exchange rates updated successfully",
    )))
}

/// Get the full report-sync state document
///
/// GET /api/ads-report-sync-key-value
///
/// Defaults to an empty object when nothing has ever been stored.
pub async fn get_report_sync(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    read_document(&state, REPORT_SYNC_KEY, Value::Object(Default::default())).await
}

/// Replace the full report-sync state document
///
/// POST /api/ads-report-sync-key-value
pub async fn replace_report_sync(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<Json<MessageResponse>, ApiError> {
    replace_document(&state, REPORT_SYNC_KEY, &body).await?;

    Ok(Json(MessageResponse::new(
        "Report sync data updated successfully",
    )))
}

async fn read_document(state: &AppState, key: &str, default: Value) -> Result<Json<Value>, ApiError> {
    let store = SqliteDocumentStore::new(state.pool.clone());

    match store.get(key).await? {
        Some(raw) => {
            let document = serde_json::from_str(&raw).map_err(|e| {
                ApiError::internal_server_error(format!("Stored document is not valid JSON: {}", e))
            })?;
            Ok(Json(document))
        }
        None => Ok(Json(default)),
    }
}

/// Whole-document replace: the request body verbatim, no merge, last
/// writer wins.
async fn replace_document(state: &AppState, key: &str, document: &Value) -> Result<(), ApiError> {
    let store = SqliteDocumentStore::new(state.pool.clone());
    store.put(key, &document.to_string()).await?;

    Ok(())
}
