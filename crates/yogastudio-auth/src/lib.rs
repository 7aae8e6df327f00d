//! # Yoga Studio Auth
//!
//! Authentication claims and JWT utilities.
//!
//! - [`claims`]: the access token payload
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use yogastudio_auth::{create_access_token, verify_token};
//! use yogastudio_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(1, "yoga@studio.com", true, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert!(claims.admin);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
