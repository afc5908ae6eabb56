//! HTTP client module
//!
//! Transport for the remote index: a single rate-limited JSON POST with a
//! timeout. No retries.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
