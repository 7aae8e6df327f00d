//! Session and attendance seeding.

use chrono::{Duration, DurationRound, Utc};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;
use sqlx::PgPool;
use std::time::Instant;
use yogastudio_models::{SessionId, TeacherId, UserId};

use super::models::{Attendance, SessionSeed};

const STYLES: [&str; 8] = [
    "Hatha", "Vinyasa", "Yin", "Ashtanga", "Kundalini", "Restorative", "Iyengar", "Power",
];
const SLOTS: [&str; 4] = ["Sunrise", "Lunchtime", "Evening", "Weekend"];

/// Sessions spread over the next eight weeks, each led by one of `teacher_ids`.
pub fn generate_sessions(count: usize, teacher_ids: &[TeacherId]) -> Vec<SessionSeed> {
    if teacher_ids.is_empty() {
        return Vec::new();
    }

    let now = Utc::now()
        .duration_trunc(Duration::hours(1))
        .unwrap_or_else(|_| Utc::now());

    (0..count)
        .into_par_iter()
        .map(|_| {
            let style = STYLES[(0..STYLES.len()).fake::<usize>()];
            let slot = SLOTS[(0..SLOTS.len()).fake::<usize>()];
            let teacher_id = teacher_ids[(0..teacher_ids.len()).fake::<usize>()];
            let offset = Duration::days((1..56).fake::<i64>())
                + Duration::hours((7..21).fake::<i64>());

            SessionSeed {
                name: format!("{} {}", slot, style),
                description: Sentence(8..20).fake(),
                date: now + offset,
                teacher_id,
            }
        })
        .collect()
}

/// Draws up to `max_attendees` distinct users for each session.
pub fn generate_attendance(
    session_ids: &[SessionId],
    user_ids: &[UserId],
    max_attendees: usize,
) -> Vec<Attendance> {
    if user_ids.is_empty() {
        return Vec::new();
    }

    session_ids
        .par_iter()
        .flat_map(|&session_id| {
            let wanted = (0..=max_attendees.min(user_ids.len())).fake::<usize>();
            let start = (0..user_ids.len()).fake::<usize>();

            (0..wanted)
                .map(|i| (session_id, user_ids[(start + i) % user_ids.len()]))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_sessions(
    db: &PgPool,
    count: usize,
    teacher_ids: &[TeacherId],
) -> Result<Vec<SessionId>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📅 Seeding {} sessions...", count);

    let sessions = generate_sessions(count, teacher_ids);
    let session_ids = insert_sessions_batch(db, &sessions).await?;

    println!(
        "   ✓ Inserted {} sessions in {:?}",
        session_ids.len(),
        start_time.elapsed()
    );

    Ok(session_ids)
}

pub async fn insert_sessions_batch(
    db: &PgPool,
    sessions: &[SessionSeed],
) -> Result<Vec<SessionId>, Box<dyn std::error::Error>> {
    if sessions.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO sessions (name, description, date, teacher_id, seeded) VALUES ");
    for i in 0..sessions.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, TRUE)",
            p + 1,
            p + 2,
            p + 3,
            p + 4
        ));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for session in sessions {
        q = q
            .bind(&session.name)
            .bind(&session.description)
            .bind(session.date)
            .bind(session.teacher_id);
    }

    let ids: Vec<SessionId> = q.fetch_all(db).await?;
    Ok(ids)
}

pub async fn seed_attendance(
    db: &PgPool,
    session_ids: &[SessionId],
    user_ids: &[UserId],
    max_attendees: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🙋 Enrolling members in sessions...");

    let attendance = generate_attendance(session_ids, user_ids, max_attendees);
    let (sessions, users): (Vec<SessionId>, Vec<UserId>) = attendance.into_iter().unzip();

    let inserted = sqlx::query(
        r#"INSERT INTO participate (session_id, user_id)
           SELECT * FROM UNNEST($1::bigint[], $2::bigint[])
           ON CONFLICT DO NOTHING"#,
    )
    .bind(&sessions)
    .bind(&users)
    .execute(db)
    .await?
    .rows_affected();

    println!(
        "   ✓ Inserted {} participations in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Deletes seeded sessions along with their attendance.
pub async fn clear_sessions(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded sessions...");

    let result = sqlx::query("DELETE FROM sessions WHERE seeded")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} sessions in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sessions_uses_given_teachers() {
        let teachers = [TeacherId::new(7), TeacherId::new(9)];

        let sessions = generate_sessions(25, &teachers);

        assert_eq!(sessions.len(), 25);
        assert!(sessions.iter().all(|s| teachers.contains(&s.teacher_id)));
        assert!(sessions.iter().all(|s| s.date > Utc::now()));
    }

    #[test]
    fn test_generate_sessions_without_teachers() {
        assert!(generate_sessions(5, &[]).is_empty());
    }

    #[test]
    fn test_generate_attendance_is_distinct_per_session() {
        let sessions: Vec<SessionId> = (1..=10).map(SessionId::new).collect();
        let users: Vec<UserId> = (1..=4).map(UserId::new).collect();

        let attendance = generate_attendance(&sessions, &users, 10);

        for session in &sessions {
            let mut attendees: Vec<UserId> = attendance
                .iter()
                .filter(|(s, _)| s == session)
                .map(|(_, u)| *u)
                .collect();
            let total = attendees.len();
            attendees.sort_unstable();
            attendees.dedup();
            assert_eq!(attendees.len(), total);
            assert!(total <= users.len());
        }
    }
}
