use anyhow::anyhow;
use sqlx::{PgExecutor, PgPool};
use tracing::{info, instrument, warn};

use yogastudio_core::AppError;
use yogastudio_observability::track_user_deleted;

use super::model::{User, UserId};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, email, first_name, last_name, admin, password, created_at, updated_at
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    pub async fn exists<'e, E>(executor: E, id: UserId) -> Result<bool, AppError>
    where
        E: PgExecutor<'e>,
    {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    /// Deletes the account identified by `id` when it belongs to the caller.
    ///
    /// Participations go with the account through `ON DELETE CASCADE`.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: UserId, caller_email: &str) -> Result<(), AppError> {
        let user = Self::find_by_id(db, id).await?;

        if user.email != caller_email {
            warn!(user_id = %id, "Refused to delete another user's account");
            return Err(AppError::unauthorized(
                "You can only delete your own account",
            ));
        }

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        info!(user_id = %id, "User deleted");
        track_user_deleted();

        Ok(())
    }
}
