//! Authentication and authorization extractors.
//!
//! - [`auth`]: [`auth::AuthUser`] validates the bearer token
//! - [`role`]: [`role::RequireAdmin`] additionally requires the admin flag
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireAdmin;
//!
//! async fn list(_auth_user: AuthUser) -> impl IntoResponse { /* any valid token */ }
//!
//! async fn create(RequireAdmin(auth_user): RequireAdmin) -> impl IntoResponse {
//!     // only reached when the token carries `admin: true`
//! }
//! ```

pub mod auth;
pub mod role;
