//! Member seeding. Seeded accounts use the `@example.com` domain and carry
//! the `seeded` flag.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::PgPool;
use std::time::Instant;
use yogastudio_models::UserId;

use super::models::UserSeed;

pub const SEED_EMAIL_DOMAIN: &str = "example.com";

pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx,
                SEED_EMAIL_DOMAIN
            );

            UserSeed {
                first_name,
                last_name,
                email,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} members...", count);

    let users = generate_users(count, password_hash);
    let user_ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} members in {:?}",
        user_ids.len(),
        start_time.elapsed()
    );

    Ok(user_ids)
}

/// Inserts users in chunks of multi-value INSERTs inside one transaction.
/// Emails already present are skipped.
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    // 4 params per user
    const BATCH_SIZE: usize = 1000;

    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let mut query =
            String::from("INSERT INTO users (first_name, last_name, email, password, seeded) VALUES ");
        for i in 0..chunk.len() {
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
        query.push_str(" ON CONFLICT (email) DO NOTHING RETURNING id");

        let mut q = sqlx::query_scalar(&query);
        for user in chunk {
            q = q
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(&user.email)
                .bind(&user.password_hash);
        }

        let ids: Vec<UserId> = q.fetch_all(&mut *tx).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

/// Deletes seeded members.
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded members...");

    let result = sqlx::query("DELETE FROM users WHERE seeded")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} members in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
