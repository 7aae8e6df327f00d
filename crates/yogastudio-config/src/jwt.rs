//! JWT configuration.
//!
//! - `JWT_SECRET`: HMAC signing secret
//! - `JWT_EXPIRATION`: token lifetime in seconds (default: 86400, one day)

use std::env;

/// Default token lifetime: one day.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry: env::var("JWT_EXPIRATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|expiry: &i64| *expiry > 0)
                .unwrap_or(DEFAULT_TOKEN_EXPIRY),
        }
    }
}
