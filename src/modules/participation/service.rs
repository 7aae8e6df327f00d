use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::{info, instrument};

use yogastudio_core::AppError;
use yogastudio_models::ids::{SessionId, UserId};
use yogastudio_observability::track_participation;

use crate::modules::users::service::UserService;

pub struct ParticipationService;

impl ParticipationService {
    /// Adds `user_id` to the session's attendees.
    ///
    /// 404 when the session or the user is missing, 400 when the user already
    /// attends.
    #[instrument(skip(db))]
    pub async fn participate(
        db: &PgPool,
        id: SessionId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        lock_session(&mut tx, id).await?;

        if !UserService::exists(&mut *tx, user_id).await? {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        let inserted = sqlx::query(
            r#"INSERT INTO participate (session_id, user_id)
               VALUES ($1, $2)
               ON CONFLICT DO NOTHING"#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 0 {
            return Err(AppError::bad_request(anyhow!(
                "User already participates in this session"
            )));
        }

        touch_session(&mut tx, id).await?;
        tx.commit().await?;

        info!(session_id = %id, user_id = %user_id, "User joined session");
        track_participation("join");

        Ok(())
    }

    /// Removes `user_id` from the session's attendees.
    ///
    /// 404 when the session is missing, 400 when the user does not attend.
    #[instrument(skip(db))]
    pub async fn no_longer_participate(
        db: &PgPool,
        id: SessionId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        lock_session(&mut tx, id).await?;

        let removed = sqlx::query("DELETE FROM participate WHERE session_id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if removed.rows_affected() == 0 {
            return Err(AppError::bad_request(anyhow!(
                "User does not participate in this session"
            )));
        }

        touch_session(&mut tx, id).await?;
        tx.commit().await?;

        info!(session_id = %id, user_id = %user_id, "User left session");
        track_participation("leave");

        Ok(())
    }
}

/// Locks the session row for the rest of the transaction, or fails with 404.
async fn lock_session(conn: &mut PgConnection, id: SessionId) -> Result<(), AppError> {
    sqlx::query_scalar::<_, SessionId>("SELECT id FROM sessions WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Session not found")))?;

    Ok(())
}

async fn touch_session(conn: &mut PgConnection, id: SessionId) -> Result<(), AppError> {
    sqlx::query("UPDATE sessions SET updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::{DateTime, TimeZone, Utc};

    async fn insert_session(pool: &PgPool) -> SessionId {
        sqlx::query_scalar::<_, SessionId>(
            r#"INSERT INTO sessions (name, description, date)
               VALUES ('Hatha', 'Gentle', NOW())
               RETURNING id"#,
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn insert_user(pool: &PgPool, email: &str) -> UserId {
        sqlx::query_scalar::<_, UserId>(
            r#"INSERT INTO users (email, first_name, last_name, admin, password)
               VALUES ($1, 'Test', 'User', FALSE, 'not-a-real-hash')
               RETURNING id"#,
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn stale() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
    }

    async fn set_updated_at(pool: &PgPool, id: SessionId, at: DateTime<Utc>) {
        sqlx::query("UPDATE sessions SET updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(pool)
            .await
            .unwrap();
    }

    async fn updated_at(pool: &PgPool, id: SessionId) -> DateTime<Utc> {
        sqlx::query_scalar("SELECT updated_at FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn attendees(pool: &PgPool, id: SessionId) -> Vec<UserId> {
        sqlx::query_scalar::<_, UserId>(
            "SELECT user_id FROM participate WHERE session_id = $1 ORDER BY user_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participate_adds_user(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "join@mail.fr").await;

        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();

        assert_eq!(attendees(&pool, session).await, vec![user]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participate_refreshes_updated_at(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "fresh@mail.fr").await;
        set_updated_at(&pool, session, stale()).await;

        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();

        assert!(updated_at(&pool, session).await > stale());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_no_longer_participate_refreshes_updated_at(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "stale@mail.fr").await;
        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();
        set_updated_at(&pool, session, stale()).await;

        ParticipationService::no_longer_participate(&pool, session, user)
            .await
            .unwrap();

        assert!(updated_at(&pool, session).await > stale());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participate_twice_is_bad_request(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "twice@mail.fr").await;

        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();
        let err = ParticipationService::participate(&pool, session, user)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(attendees(&pool, session).await, vec![user]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participate_missing_session(pool: PgPool) {
        let user = insert_user(&pool, "lost@mail.fr").await;

        let err = ParticipationService::participate(&pool, SessionId::new(i64::MAX), user)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participate_missing_user(pool: PgPool) {
        let session = insert_session(&pool).await;

        let err = ParticipationService::participate(&pool, session, UserId::new(i64::MAX))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_no_longer_participate_removes_user(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "leave@mail.fr").await;
        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();

        ParticipationService::no_longer_participate(&pool, session, user)
            .await
            .unwrap();

        assert!(attendees(&pool, session).await.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_no_longer_participate_when_not_attending(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "absent@mail.fr").await;

        let err = ParticipationService::no_longer_participate(&pool, session, user)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_no_longer_participate_missing_session(pool: PgPool) {
        let user = insert_user(&pool, "nowhere@mail.fr").await;

        let err =
            ParticipationService::no_longer_participate(&pool, SessionId::new(i64::MAX), user)
                .await
                .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_deleting_user_removes_participation(pool: PgPool) {
        let session = insert_session(&pool).await;
        let user = insert_user(&pool, "gone@mail.fr").await;
        ParticipationService::participate(&pool, session, user)
            .await
            .unwrap();

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user)
            .execute(&pool)
            .await
            .unwrap();

        assert!(attendees(&pool, session).await.is_empty());
    }
}
