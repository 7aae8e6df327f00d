use sqlx::PgPool;
use tracing::{info, instrument, warn};

use yogastudio_auth::create_access_token;
use yogastudio_config::JwtConfig;
use yogastudio_core::{AppError, hash_password, verify_password};
use yogastudio_models::users::User;
use yogastudio_observability::{
    track_jwt_issued, track_login_failure, track_login_success, track_user_registered,
};

use super::model::{JwtResponse, LoginRequest, RegisterOutcome, SignupRequest};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_user(
        db: &PgPool,
        dto: SignupRequest,
    ) -> Result<RegisterOutcome, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(&dto.email)
        .fetch_one(db)
        .await?;

        if taken {
            return Ok(RegisterOutcome::EmailTaken);
        }

        let hashed_password = hash_password(&dto.password)?;

        let inserted = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, first_name, last_name, admin, password)
               VALUES ($1, $2, $3, FALSE, $4)
               RETURNING id, email, first_name, last_name, admin, password, created_at, updated_at"#,
        )
        .bind(&dto.email)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&hashed_password)
        .fetch_one(db)
        .await;

        match inserted {
            Ok(user) => {
                info!(user_id = %user.id, "User registered");
                track_user_registered();
                Ok(RegisterOutcome::Registered(user))
            }
            // Lost a race with a concurrent registration of the same email
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(RegisterOutcome::EmailTaken)
            }
            Err(e) => Err(AppError::database(e)),
        }
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<JwtResponse, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, email, first_name, last_name, admin, password, created_at, updated_at
               FROM users WHERE email = $1"#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        let Some(user) = user else {
            warn!("Login attempt for unknown email");
            track_login_failure("unknown_email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &user.password)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            track_login_failure("invalid_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token =
            create_access_token(user.id.into_inner(), &user.email, user.admin, jwt_config)?;

        track_jwt_issued();
        track_login_success(user.admin);

        Ok(JwtResponse::bearer(
            token,
            user.id,
            user.email,
            user.first_name,
            user.last_name,
            user.admin,
        ))
    }
}
