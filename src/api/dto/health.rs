//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with storage status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: CheckStatus,
}

/// Storage backend health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub backend: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
