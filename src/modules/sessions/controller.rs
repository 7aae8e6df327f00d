use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use yogastudio_core::{AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::validator::{IdPath, ValidatedJson};

use super::model::{Session, SessionDto, SessionId};
use super::service::SessionService;

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "All sessions ordered by id", body = Vec<Session>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_sessions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = SessionService::find_all(&state.db).await?;
    Ok(Json(sessions))
}

#[utoipa::path(
    get,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session details with attendee ids", body = Session),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_session(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    IdPath(id): IdPath<SessionId>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::find_by_id(&state.db, id).await?;
    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/api/session",
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session created", body = Session),
        (status = 400, description = "Invalid body or unknown teacher", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(admin = %auth_user.0.email()))]
pub async fn create_session(
    State(state): State<AppState>,
    auth_user: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::create(&state.db, dto).await?;
    Ok(Json(session))
}

#[utoipa::path(
    put,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session updated", body = Session),
        (status = 400, description = "Invalid id, invalid body or unknown teacher", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(admin = %auth_user.0.email()))]
pub async fn update_session(
    State(state): State<AppState>,
    auth_user: RequireAdmin,
    IdPath(id): IdPath<SessionId>,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::update(&state.db, id, dto).await?;
    Ok(Json(session))
}

#[utoipa::path(
    delete,
    path = "/api/session/{id}",
    params(
        ("id" = i64, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    tag = "Sessions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(admin = %auth_user.0.email()))]
pub async fn delete_session(
    State(state): State<AppState>,
    auth_user: RequireAdmin,
    IdPath(id): IdPath<SessionId>,
) -> Result<StatusCode, AppError> {
    SessionService::delete(&state.db, id).await?;
    Ok(StatusCode::OK)
}
