//! Teacher seeding.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::PgPool;
use std::time::Instant;
use yogastudio_models::TeacherId;

use super::models::TeacherSeed;

pub fn generate_teachers(count: usize) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let last_name: String = LastName().fake();
            TeacherSeed {
                first_name: FirstName().fake(),
                last_name: last_name.to_uppercase(),
            }
        })
        .collect()
}

pub async fn seed_teachers(
    db: &PgPool,
    count: usize,
) -> Result<Vec<TeacherId>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🧘 Seeding {} teachers...", count);

    let teachers = generate_teachers(count);
    let teacher_ids = insert_teachers_batch(db, &teachers).await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        teacher_ids.len(),
        start_time.elapsed()
    );

    Ok(teacher_ids)
}

pub async fn insert_teachers_batch(
    db: &PgPool,
    teachers: &[TeacherSeed],
) -> Result<Vec<TeacherId>, Box<dyn std::error::Error>> {
    if teachers.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO teachers (first_name, last_name, seeded) VALUES ");
    for i in 0..teachers.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${}, TRUE)", i * 2 + 1, i * 2 + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for teacher in teachers {
        q = q.bind(&teacher.first_name).bind(&teacher.last_name);
    }

    let ids: Vec<TeacherId> = q.fetch_all(db).await?;
    Ok(ids)
}

/// Deletes seeded teachers. Sessions still referencing one keep a NULL
/// `teacher_id`.
pub async fn clear_teachers(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded teachers...");

    let result = sqlx::query("DELETE FROM teachers WHERE seeded")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} teachers in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
