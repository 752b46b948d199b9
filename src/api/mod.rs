// API layer module (HTTP adapters over the domain)

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_secret: String,
}
