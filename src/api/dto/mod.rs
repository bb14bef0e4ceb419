//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod create;
pub mod list;

use serde::Serialize;

/// Plain acknowledgement body, e.g. after a delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
