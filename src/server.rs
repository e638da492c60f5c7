//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, rate limiting, and Axum server lifecycle.

use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::config::Config;
use crate::domain::repositories::BookmarkRepository;
use crate::infrastructure::persistence::{InMemoryBookmarkRepository, PgBookmarkRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::validation::LinkPolicy;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store
/// - Link policy from the configured denylist
/// - Per-IP rate limiting
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn BookmarkRepository> = match &config.database_url {
        Some(url) => {
            let pool = connect_pool(&config, url).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Arc::new(PgBookmarkRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("No database configured. Bookmarks are kept in memory only.");
            Arc::new(InMemoryBookmarkRepository::new())
        }
    };

    let state = AppState::new(repository, LinkPolicy::new(config.banned_links.clone()));

    let router = rate_limit::apply(
        app_router(state),
        RateLimitSettings {
            per_second: config.rate_limit_per_second,
            burst: config.rate_limit_burst,
            behind_proxy: config.behind_proxy,
        },
    )?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens a pool with the configured limits.
async fn connect_pool(config: &Config, url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
