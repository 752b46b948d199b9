// Domain layer module exports
// Entities and repository traits, independent of the HTTP and SQLite adapters

pub mod errors;
pub mod repositories;
