//! Authentication payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;

pub use yogastudio_auth::Claims;

/// Credentials posted to `/api/auth/login`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email must not be blank"))]
    #[schema(example = "yoga@studio.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be blank"))]
    #[schema(example = "test!1234")]
    pub password: String,
}

/// Account creation request posted to `/api/auth/register`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    #[schema(example = "user@mail.fr")]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "firstName must be 3 to 20 characters"))]
    pub first_name: String,
    #[validate(length(min = 3, max = 20, message = "lastName must be 3 to 20 characters"))]
    pub last_name: String,
    #[validate(length(min = 6, max = 40, message = "password must be 6 to 40 characters"))]
    pub password: String,
}

/// Login result: the bearer token and the profile the client keeps for the
/// browser session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type")]
    #[schema(example = "Bearer")]
    pub token_type: String,
    pub id: UserId,
    /// The account email
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl JwtResponse {
    pub fn bearer(
        token: String,
        id: UserId,
        username: String,
        first_name: String,
        last_name: String,
        admin: bool,
    ) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            id,
            username,
            first_name,
            last_name,
            admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
