//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check: storage ping
//! - `/bookmarks`          - Bookmark REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Rate limiting is added by [`crate::server::run`] because it depends on the
//! peer address supplied by the listener.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::bookmark_routes())
        .with_state(state)
        .layer(tracing::layer())
}
