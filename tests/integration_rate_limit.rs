mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::test_state;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use yogastudio::router::init_router;
use yogastudio_config::RateLimitConfig;

fn login_request(client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .header("x-forwarded-for", client_ip)
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "nobody@studio.com",
                "password": "password123"
            }))
            .unwrap(),
        ))
        .unwrap()
}

/// One token per client, replenished once a minute.
fn strict_rate_limit_config() -> RateLimitConfig {
    RateLimitConfig {
        enabled: true,
        auth_per_second: 60,
        auth_burst_size: 1,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_auth_rate_limit_exceeded(pool: PgPool) {
    let app = init_router(test_state(pool, strict_rate_limit_config()));

    let response = app.clone().oneshot(login_request("192.168.1.100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(login_request("192.168.1.100")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_auth_rate_limit_is_per_client(pool: PgPool) {
    let app = init_router(test_state(pool, strict_rate_limit_config()));

    let response = app.clone().oneshot(login_request("10.0.0.1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(login_request("10.0.0.2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_disabled_rate_limit_never_throttles(pool: PgPool) {
    let app = init_router(test_state(pool, RateLimitConfig::disabled()));

    for _ in 0..5 {
        let response = app.clone().oneshot(login_request("10.0.0.3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
