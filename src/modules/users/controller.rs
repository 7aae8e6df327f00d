use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use yogastudio_core::{AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::IdPath;

use super::model::{User, UserId};
use super::service::UserService;

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details, without password", body = User),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    IdPath(id): IdPath<UserId>,
) -> Result<Json<User>, AppError> {
    let user = UserService::find_by_id(&state.db, id).await?;
    Ok(Json(user))
}

/// Delete one's own account
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "Unauthorized or not the account owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(id): IdPath<UserId>,
) -> Result<StatusCode, AppError> {
    UserService::delete(&state.db, id, auth_user.email()).await?;
    Ok(StatusCode::OK)
}
