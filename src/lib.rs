//! Ad-operations back-office API
//!
//! CRUD gateway over a SQLite store for users, ad orders, and invoices,
//! plus whole-document key-value endpoints for exchange rates and
//! report-sync state.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
