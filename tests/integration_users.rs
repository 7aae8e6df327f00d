mod common;

use axum::http::StatusCode;
use common::{
    attendee_ids, create_test_session, create_test_teacher, create_test_user, send,
    setup_test_app, token_for,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_hides_password(pool: PgPool) {
    let member = create_test_user(&pool, "member@studio.com", "secret123", false).await;
    let viewer = create_test_user(&pool, "viewer@studio.com", "secret123", false).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/user/{}", member.id);
    let (status, body) = send(&app, "GET", &uri, Some(&token_for(&viewer)), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], member.id.into_inner());
    assert_eq!(body["email"], "member@studio.com");
    assert_eq!(body["firstName"], "Test");
    assert_eq!(body["admin"], false);
    assert!(body.get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_errors(pool: PgPool) {
    let member = create_test_user(&pool, "member@studio.com", "secret123", false).await;
    let token = token_for(&member);
    let app = setup_test_app(pool);

    let (status, _) = send(&app, "GET", "/api/user/999999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/user/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_own_account(pool: PgPool) {
    let teacher = create_test_teacher(&pool, "Iris", "NADAL").await;
    let session = create_test_session(&pool, "Sunrise Hatha", teacher).await;
    let member = create_test_user(&pool, "member@studio.com", "secret123", false).await;
    let token = token_for(&member);
    let app = setup_test_app(pool.clone());

    let participate = format!("/api/session/{}/participate/{}", session, member.id);
    let (status, _) = send(&app, "POST", &participate, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/user/{}", member.id);
    let (status, _) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let admin = create_test_user(&pool, "boss@studio.com", "secret123", true).await;
    let (status, _) = send(&app, "GET", &uri, Some(&token_for(&admin)), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(attendee_ids(&pool, session).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_other_account_is_unauthorized(pool: PgPool) {
    let member = create_test_user(&pool, "member@studio.com", "secret123", false).await;
    let other = create_test_user(&pool, "other@studio.com", "secret123", false).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/user/{}", other.id);
    let (status, _) = send(&app, "DELETE", &uri, Some(&token_for(&member)), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", &uri, Some(&token_for(&member)), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_account(pool: PgPool) {
    let member = create_test_user(&pool, "member@studio.com", "secret123", false).await;
    let app = setup_test_app(pool);

    let (status, _) = send(&app, "DELETE", "/api/user/999999", Some(&token_for(&member)), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
