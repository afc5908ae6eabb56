//! Client-side rate limiting for page fetches
//!
//! Token bucket backed by governor. Keeps a long collection run from
//! hammering the public index.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Requests allowed per second, with a burst allowance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Sustained page fetches per second
    pub requests_per_second: u32,
    /// Fetches allowed back to back before throttling
    pub burst_size: u32,
}

impl RateLimiterConfig {
    /// Steady rate with a burst equal to one second of requests
    pub fn per_second(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            burst_size: requests_per_second,
        }
    }
}

/// Shared token bucket; zero rates are clamped to one per second
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a limiter from config
    pub fn new(config: &RateLimiterConfig) -> Self {
        let rate = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        Self {
            bucket: Arc::new(Governor::direct(Quota::per_second(rate).allow_burst(burst))),
        }
    }

    /// Resolve once the next fetch may go out
    pub async fn wait(&self) {
        self.bucket.until_ready().await;
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_per_second_sets_burst() {
        let config = RateLimiterConfig::per_second(4);
        assert_eq!(config.requests_per_second, 4);
        assert_eq!(config.burst_size, 4);
    }

    #[tokio::test]
    async fn test_burst_passes_without_waiting() {
        let limiter = RateLimiter::new(&RateLimiterConfig::per_second(5));

        let burst = async {
            for _ in 0..5 {
                limiter.wait().await;
            }
        };
        assert!(tokio::time::timeout(Duration::from_millis(200), burst)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_zero_rate_throttles_to_one_per_second() {
        let limiter = RateLimiter::new(&RateLimiterConfig::per_second(0));
        limiter.wait().await;

        let second = tokio::time::timeout(Duration::from_millis(100), limiter.wait()).await;
        assert!(second.is_err());
    }
}
