use anyhow::anyhow;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use yogastudio_core::AppError;

use super::model::{Teacher, TeacherId};

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: TeacherId) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Teacher not found")))
    }

    /// Inside a transaction the teacher row stays key-share locked until
    /// commit, so it cannot be deleted before a referencing insert lands.
    pub async fn exists<'e, E>(executor: E, id: TeacherId) -> Result<bool, AppError>
    where
        E: PgExecutor<'e>,
    {
        let found =
            sqlx::query_scalar::<_, TeacherId>("SELECT id FROM teachers WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(found.is_some())
    }
}
