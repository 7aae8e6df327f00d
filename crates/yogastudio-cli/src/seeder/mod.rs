//! Demo data for development databases: teachers, members, sessions and
//! attendance.
//!
//! # Module Structure
//!
//! - [`teachers`] - Teacher generation and insertion
//! - [`users`] - Member generation and insertion
//! - [`sessions`] - Session generation, insertion and attendance
//! - [`models`] - Seed records and configuration
//!
//! Data is generated in parallel with Rayon and inserted with multi-value
//! INSERT statements. All members share one bcrypt hash computed at cost 4.
//! Every inserted row carries `seeded = TRUE`, which is all the clearing
//! functions look at.

pub mod models;
pub mod sessions;
pub mod teachers;
pub mod users;

pub use models::SeedConfig;

use bcrypt::hash;
use sqlx::PgPool;
use std::time::Instant;

pub const SEED_PASSWORD: &str = "Password@123";

/// Seeds teachers, members, sessions and attendance.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Teachers: {}", config.num_teachers);
    println!("   - Members: {}", config.num_users);
    println!(
        "   - Sessions: {} (up to {} attendees each)",
        config.num_sessions, config.max_attendees
    );

    let password_hash = hash_password()?;

    let teacher_ids = teachers::seed_teachers(db, config.num_teachers).await?;
    let user_ids = users::seed_users(db, config.num_users, &password_hash).await?;
    let session_ids = sessions::seed_sessions(db, config.num_sessions, &teacher_ids).await?;
    let participations =
        sessions::seed_attendance(db, &session_ids, &user_ids, config.max_attendees).await?;

    println!(
        "\n✅ Seeding complete! Created {} teachers, {} members, {} sessions, {} participations in {:?}",
        teacher_ids.len(),
        user_ids.len(),
        session_ids.len(),
        participations,
        start_time.elapsed()
    );
    println!("\n📝 Default password for all members: {}", SEED_PASSWORD);

    Ok(())
}

/// Removes the sessions, teachers and members created by `seed_all`. Rows
/// created any other way stay.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing all seeded data...");

    sessions::clear_sessions(db).await?;
    teachers::clear_teachers(db).await?;
    users::clear_users(db).await?;

    println!("✅ All seeded data cleared in {:?}", start_time.elapsed());
    Ok(())
}

fn hash_password() -> Result<String, Box<dyn std::error::Error>> {
    println!("🔐 Hashing password...");
    let start = Instant::now();
    let hash = hash(SEED_PASSWORD, 4).map_err(|e| format!("Failed to hash password: {}", e))?;
    println!("   ✓ Hashed password in {:?}", start.elapsed());
    Ok(hash)
}
