// src/presentation/http/middleware/rate_limit.rs
//! Per-client token bucket on the API routes.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 20;

/// Limits each peer IP to [`REQUESTS_PER_SECOND`] with bursts of [`BURST_SIZE`].
///
/// The key is read from `ConnectInfo<SocketAddr>`, so the router has to be
/// served with `into_make_service_with_connect_info`. Requests over the limit
/// receive `429 Too Many Requests`.
pub fn layer() -> Option<RateLimitLayer> {
    let config = GovernorConfigBuilder::default()
        .per_second(REQUESTS_PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_accepted() {
        assert!(layer().is_some());
    }
}
