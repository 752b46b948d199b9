use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Tables created at startup; `IF NOT EXISTS` keeps restarts idempotent.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    created       INTEGER NOT NULL,
    username      TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    email         TEXT NOT NULL,
    session_token TEXT
);

CREATE TABLE IF NOT EXISTS ads_orders (
    id                   TEXT PRIMARY KEY,
    created              INTEGER NOT NULL,
    start_date           TEXT NOT NULL,
    end_date             TEXT NOT NULL,
    campaign_name        TEXT NOT NULL,
    budget               REAL NOT NULL,
    days                 INTEGER NOT NULL,
    platform             TEXT NOT NULL,
    objective            TEXT NOT NULL,
    auction              TEXT NOT NULL,
    estimated_impression INTEGER NOT NULL,
    estimated_click      INTEGER NOT NULL,
    estimated_ctr        REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS invoices (
    id             TEXT PRIMARY KEY,
    date           TEXT NOT NULL,
    month          TEXT NOT NULL,
    transaction_id TEXT NOT NULL,
    platform       TEXT NOT NULL,
    attachments    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS kv_documents (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Opens a SQLite pool for the given URL, creating the database file if
/// it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Applies the schema to a freshly opened pool.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
