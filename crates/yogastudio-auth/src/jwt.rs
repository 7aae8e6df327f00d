//! JWT creation and verification.
//!
//! Tokens are HMAC-signed with the configured secret and expire after
//! `JwtConfig::token_expiry` seconds.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use yogastudio_config::JwtConfig;
use yogastudio_core::AppError;

use crate::claims::Claims;

/// Creates an access token for a user.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: i64,
    email: &str,
    admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        admin,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error when the signature does not match, the token
/// has expired, or the token is malformed or empty.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    // No clock-skew allowance on `exp`.
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry: 86_400,
        }
    }

    fn signed_with(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = test_config();
        let token = create_access_token(1, "user@mail.fr", true, &config).unwrap();

        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "user@mail.fr");
        assert!(claims.admin);
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = test_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "1".to_string(),
            email: "user@mail.fr".to_string(),
            admin: false,
            exp: now + 3600,
            iat: now,
        };
        let token = signed_with(&claims, "BadSecretKey");

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_expired() {
        let config = test_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "1".to_string(),
            email: "user@mail.fr".to_string(),
            admin: false,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = signed_with(&claims, &config.secret);

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_verify_token_just_expired() {
        let config = test_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "1".to_string(),
            email: "user@mail.fr".to_string(),
            admin: false,
            exp: now - 30,
            iat: now - 3630,
        };
        let token = signed_with(&claims, &config.secret);

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_malformed() {
        let config = test_config();
        assert!(verify_token("token", &config).is_err());
        assert!(verify_token("invalid.token.here", &config).is_err());
    }

    #[test]
    fn test_verify_token_empty() {
        assert!(verify_token("", &test_config()).is_err());
    }
}
