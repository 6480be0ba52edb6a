// HTTP handlers, one module per resource

use serde::Serialize;

pub mod categories;
pub mod expenses;
pub mod health;

/// Plain confirmation body
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
