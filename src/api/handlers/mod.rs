// HTTP request handlers, one module per resource

pub mod auth;
pub mod documents;
pub mod invoices;
pub mod orders;
pub mod users;

use serde::Serialize;

/// Confirmation body for operations that return no record
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
