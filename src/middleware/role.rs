use axum::{extract::FromRequestParts, http::request::Parts};

use yogastudio_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Extractor for admin-only handlers: a valid token (401 otherwise) whose
/// claims carry `admin: true` (403 otherwise).
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_admin() {
            return Err(AppError::forbidden("Access denied. Admin role required"));
        }

        Ok(RequireAdmin(auth_user))
    }
}
