use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use yogastudio_core::{AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    EMAIL_TAKEN_MESSAGE, JwtResponse, LoginRequest, MessageResponse, REGISTERED_MESSAGE,
    RegisterOutcome, SignupRequest,
};
use super::service::AuthService;

/// Register a new (non-admin) account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Email already taken", body = MessageResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<Response, AppError> {
    let response = match AuthService::register_user(&state.db, dto).await? {
        RegisterOutcome::Registered(_) => {
            (StatusCode::OK, Json(MessageResponse::new(REGISTERED_MESSAGE)))
        }
        RegisterOutcome::EmailTaken => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(EMAIL_TAKEN_MESSAGE)),
        ),
    };

    Ok(response.into_response())
}

/// Exchange credentials for a bearer token and profile
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = JwtResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<JwtResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
