#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use yogastudio::router::init_router;
use yogastudio::state::AppState;
use yogastudio_auth::create_access_token;
use yogastudio_config::{CorsConfig, JwtConfig, RateLimitConfig};
use yogastudio_core::hash_password;
use yogastudio_models::{SessionId, TeacherId, UserId};

/// Email and password of the administrator created by the seed migration.
pub const SEEDED_ADMIN_EMAIL: &str = "yoga@studio.com";
pub const SEEDED_ADMIN_PASSWORD: &str = "test!1234";

pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub admin: bool,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        token_expiry: 3600,
    }
}

pub fn test_state(pool: PgPool, rate_limit_config: RateLimitConfig) -> AppState {
    dotenvy::dotenv().ok();
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(test_state(pool, RateLimitConfig::disabled()))
}

pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, admin: bool) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, UserId>(
        r#"
        INSERT INTO users (email, first_name, last_name, admin, password)
        VALUES ($1, 'Test', 'User', $2, $3)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(admin)
    .bind(hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        admin,
    }
}

pub fn token_for(user: &TestUser) -> String {
    create_access_token(
        user.id.into_inner(),
        &user.email,
        user.admin,
        &test_jwt_config(),
    )
    .unwrap()
}

pub async fn create_test_teacher(pool: &PgPool, first_name: &str, last_name: &str) -> TeacherId {
    sqlx::query_scalar::<_, TeacherId>(
        "INSERT INTO teachers (first_name, last_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_session(pool: &PgPool, name: &str, teacher_id: TeacherId) -> SessionId {
    sqlx::query_scalar::<_, SessionId>(
        r#"
        INSERT INTO sessions (name, description, date, teacher_id)
        VALUES ($1, 'Test description', '2025-12-01T10:00:00Z', $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(teacher_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attendee_ids(pool: &PgPool, session_id: SessionId) -> Vec<UserId> {
    sqlx::query_scalar::<_, UserId>(
        "SELECT user_id FROM participate WHERE session_id = $1 ORDER BY user_id",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await
    .unwrap()
}

/// Sends one request and returns the status with the JSON body, or
/// `Value::Null` when the body is empty.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
