//! Rate limiting configuration for the authentication endpoints.
//!
//! Login and registration are the only unauthenticated routes, so they carry
//! a per-client token bucket to slow down credential stuffing.
//!
//! # Configuration
//!
//! - `RATE_LIMIT_ENABLED`: set to `false` or `0` to disable (default: enabled)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: seconds needed to replenish one token (default: 2)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: maximum tokens in the bucket (default: 10)
//!
//! Clients are keyed by `X-Forwarded-For`, `X-Real-IP`, `Forwarded`, then the
//! peer address, so the server must be started with connect info.

use ::governor::clock::QuantaInstant;
use ::governor::middleware::NoOpMiddleware;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

pub type AuthGovernorConfig = GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Replenish interval for auth endpoints, in seconds per token.
    pub auth_per_second: u64,
    /// Burst size for auth endpoints.
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 2,
            auth_burst_size: 10,
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("RATE_LIMIT_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            auth_per_second: std::env::var("RATE_LIMIT_AUTH_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_per_second),
            auth_burst_size: std::env::var("RATE_LIMIT_AUTH_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.auth_burst_size),
        }
    }

    /// Rate limiting switched off; used by tests driving the router without
    /// a peer address.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Creates the governor config for the authentication routes.
    ///
    /// # Panics
    ///
    /// Never in practice: both values are clamped to at least one, which is
    /// all `GovernorConfigBuilder::finish` checks.
    #[must_use]
    pub fn auth_governor_config(&self) -> AuthGovernorConfig {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second.max(1))
            .burst_size(self.auth_burst_size.max(1))
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Failed to build auth rate limiter config")
    }
}
