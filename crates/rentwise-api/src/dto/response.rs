//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Property store status.
    pub database: String,
}
