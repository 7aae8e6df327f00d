use axum::{extract::State, http::StatusCode};
use tracing::instrument;

use yogastudio_core::{AppError, ErrorResponse};
use yogastudio_models::ids::{SessionId, UserId};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::IdPair;

use super::service::ParticipationService;

fn ensure_can_act_for(auth_user: &AuthUser, user_id: UserId) -> Result<(), AppError> {
    if !auth_user.can_act_for(user_id) {
        return Err(AppError::forbidden(
            "You can only manage your own participation",
        ));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User added to the attendee list"),
        (status = 400, description = "Non-numeric id or already participating", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the user nor an admin", body = ErrorResponse),
        (status = 404, description = "Session or user not found", body = ErrorResponse)
    ),
    tag = "Participation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn participate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPair(id, user_id): IdPair<SessionId, UserId>,
) -> Result<StatusCode, AppError> {
    ensure_can_act_for(&auth_user, user_id)?;
    ParticipationService::participate(&state.db, id, user_id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = i64, Path, description = "Session ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed from the attendee list"),
        (status = 400, description = "Non-numeric id or not participating", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the user nor an admin", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    tag = "Participation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn no_longer_participate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPair(id, user_id): IdPair<SessionId, UserId>,
) -> Result<StatusCode, AppError> {
    ensure_can_act_for(&auth_user, user_id)?;
    ParticipationService::no_longer_participate(&state.db, id, user_id).await?;
    Ok(StatusCode::OK)
}
