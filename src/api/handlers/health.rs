//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: storage answers a ping
/// - **503 Service Unavailable**: storage is unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "storage": { "backend": "postgres", "status": "ok" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend = state.bookmark_service.backend().to_string();
    let healthy = state.bookmark_service.health_check().await;

    let storage = if healthy {
        CheckStatus {
            backend,
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            backend,
            status: "error".to_string(),
            message: Some("Storage did not answer ping".to_string()),
        }
    };

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
