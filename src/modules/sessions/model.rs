pub use yogastudio_models::ids::{SessionId, TeacherId, UserId};
pub use yogastudio_models::sessions::{Session, SessionDto};

/// Columns of [`Session`], with the attendee ids aggregated from
/// `participate`. Callers append `WHERE`, `GROUP BY s.id` and ordering.
pub(crate) const SESSION_SELECT: &str = r#"SELECT
        s.id,
        s.name,
        s.description,
        s.date,
        s.teacher_id,
        COALESCE(
            array_agg(p.user_id ORDER BY p.user_id) FILTER (WHERE p.user_id IS NOT NULL),
            '{}'
        ) AS users,
        s.created_at,
        s.updated_at
       FROM sessions s
       LEFT JOIN participate p ON p.session_id = s.id"#;
