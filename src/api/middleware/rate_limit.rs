//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters shared by every client IP.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
    /// Key on `X-Forwarded-For` / `X-Real-IP` instead of the socket peer.
    pub behind_proxy: bool,
}

/// Wraps `router` in a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The peer key extractor needs `ConnectInfo<SocketAddr>`, so the returned
/// router must be served with `into_make_service_with_connect_info`.
///
/// # Errors
///
/// Returns an error if the limits are zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = rate_limit::apply(app_router(state), settings)?;
/// ```
pub fn apply(router: Router, settings: RateLimitSettings) -> Result<Router> {
    if settings.behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(settings.per_second)
                .burst_size(settings.burst)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .context("Invalid rate limit settings")?,
        );
        Ok(router.layer(GovernorLayer::new(governor_conf)))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(settings.per_second)
                .burst_size(settings.burst)
                .key_extractor(PeerIpKeyExtractor)
                .finish()
                .context("Invalid rate limit settings")?,
        );
        Ok(router.layer(GovernorLayer::new(governor_conf)))
    }
}
