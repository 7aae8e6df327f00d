use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::{info, instrument};

use yogastudio_core::AppError;
use yogastudio_observability::track_session_operation;

use crate::modules::teachers::service::TeacherService;

use super::model::{SESSION_SELECT, Session, SessionDto, SessionId, TeacherId, UserId};

pub struct SessionService;

impl SessionService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Session>, AppError> {
        let query = format!("{} GROUP BY s.id ORDER BY s.id", SESSION_SELECT);
        let sessions = sqlx::query_as::<_, Session>(&query).fetch_all(db).await?;

        Ok(sessions)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: SessionId) -> Result<Session, AppError> {
        let query = format!("{} WHERE s.id = $1 GROUP BY s.id", SESSION_SELECT);
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Session not found")))
    }

    #[instrument(skip(db, dto), fields(name = %dto.name))]
    pub async fn create(db: &PgPool, dto: SessionDto) -> Result<Session, AppError> {
        let mut tx = db.begin().await?;
        let teacher_id = Self::require_teacher(&mut tx, &dto).await?;

        let id = sqlx::query_scalar::<_, SessionId>(
            r#"INSERT INTO sessions (name, description, date, teacher_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.date)
        .bind(teacher_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::add_attendees(&mut tx, id, &dto.attendee_ids()).await?;
        tx.commit().await?;

        info!(session_id = %id, "Session created");
        track_session_operation("create");

        Self::find_by_id(db, id).await
    }

    /// Replaces name, description, date and teacher. The attendee list is
    /// replaced only when the body carries `users`.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: SessionId, dto: SessionDto) -> Result<Session, AppError> {
        let mut tx = db.begin().await?;
        let teacher_id = Self::require_teacher(&mut tx, &dto).await?;

        let updated = sqlx::query(
            r#"UPDATE sessions
               SET name = $2, description = $3, date = $4, teacher_id = $5, updated_at = NOW()
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.date)
        .bind(teacher_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Session not found")));
        }

        if dto.users.is_some() {
            sqlx::query("DELETE FROM participate WHERE session_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::add_attendees(&mut tx, id, &dto.attendee_ids()).await?;
        }

        tx.commit().await?;

        info!(session_id = %id, "Session updated");
        track_session_operation("update");

        Self::find_by_id(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: SessionId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Session not found")));
        }

        info!(session_id = %id, "Session deleted");
        track_session_operation("delete");

        Ok(())
    }

    /// The DTO's teacher, which must exist. Locked for the rest of the
    /// transaction.
    async fn require_teacher(
        conn: &mut PgConnection,
        dto: &SessionDto,
    ) -> Result<TeacherId, AppError> {
        let teacher_id = dto
            .teacher_id
            .ok_or_else(|| AppError::bad_request(anyhow!("teacher_id is required")))?;

        if !TeacherService::exists(&mut *conn, teacher_id).await? {
            return Err(AppError::bad_request(anyhow!(
                "Teacher {} does not exist",
                teacher_id
            )));
        }

        Ok(teacher_id)
    }

    /// Inserts the given attendees, silently skipping ids with no user.
    async fn add_attendees(
        conn: &mut PgConnection,
        id: SessionId,
        user_ids: &[UserId],
    ) -> Result<(), AppError> {
        if user_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"INSERT INTO participate (session_id, user_id)
               SELECT $1, u.id FROM users u WHERE u.id = ANY($2)
               ON CONFLICT DO NOTHING"#,
        )
        .bind(id)
        .bind(user_ids)
        .execute(conn)
        .await?;

        Ok(())
    }
}
