use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use yogastudio_auth::{Claims, verify_token};
use yogastudio_core::AppError;
use yogastudio_models::ids::UserId;

use crate::state::AppState;

/// Extractor that validates the bearer token and exposes its claims.
///
/// Rejects with 401 when the header is missing, is not a `Bearer`
/// credential, or carries an invalid or expired token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn is_admin(&self) -> bool {
        self.0.admin
    }

    /// Whether the caller may act on behalf of `user_id`: the user
    /// themselves or an admin.
    pub fn can_act_for(&self, user_id: UserId) -> bool {
        self.is_admin() || self.user_id().is_ok_and(|id| id == user_id)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized("Missing or invalid authorization header"))?;

        let claims = verify_token(bearer.token(), &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
