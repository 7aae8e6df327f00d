use sqlx::PgPool;
use validator::Validate;
use yogastudio_core::hash_password;
use yogastudio_core::errors::format_validation_errors;
use yogastudio_models::{SignupRequest, UserId};

/// Inserts an administrator account. The inputs follow the same rules as
/// self-registration; fails if the email is already registered.
pub async fn create_admin(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<UserId, Box<dyn std::error::Error>> {
    let request = SignupRequest {
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        password: password.to_string(),
    };
    request.validate().map_err(|e| {
        format!(
            "Invalid administrator details: {}",
            format_validation_errors(&e)
        )
    })?;

    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (first_name, last_name, email, password, admin)
         VALUES ($1, $2, $3, $4, TRUE)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(&hashed_password)
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| "User with this email already exists".into())
}
