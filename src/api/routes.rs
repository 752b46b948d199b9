use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, documents, invoices, orders, users};
use crate::api::AppState;
use crate::config::CorsConfig;

/// Builds the full application router
///
/// The CORS policy comes in from configuration rather than living in a
/// module constant; its layer also answers OPTIONS preflight requests.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(auth::health_check))
        .route("/api/login", post(auth::login))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/api/ads-orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/api/ads-orders/:id",
            put(orders::update_order).delete(orders::delete_order),
        )
        .route(
            "/api/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/api/invoices/:id",
            put(invoices::update_invoice).delete(invoices::delete_invoice),
        )
        .route(
            "/api/ads-exchange-rates",
            get(documents::get_exchange_rates).post(documents::replace_exchange_rates),
        )
        .route(
            "/api/ads-report-sync-key-value",
            get(documents::get_report_sync).post(documents::replace_report_sync),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer())
        .with_state(state)
}
