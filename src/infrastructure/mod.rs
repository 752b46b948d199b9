// Infrastructure layer module
// SQLite pool setup, schema, and repository adapters

pub mod db;
pub mod repositories;
