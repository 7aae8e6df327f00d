use axum::{Json, extract::State};
use tracing::instrument;

use yogastudio_core::{AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::IdPath;

use super::model::{Teacher, TeacherId};
use super::service::TeacherService;

#[utoipa::path(
    get,
    path = "/api/teacher",
    responses(
        (status = 200, description = "All teachers ordered by id", body = Vec<Teacher>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_teachers(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherService::find_all(&state.db).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    params(
        ("id" = i64, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_teacher(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    IdPath(id): IdPath<TeacherId>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::find_by_id(&state.db, id).await?;
    Ok(Json(teacher))
}
