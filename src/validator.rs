//! Request extractors that turn malformed input into `400 Bad Request`.
//!
//! - [`ValidatedJson`]: JSON body checked with `validator`
//! - [`IdPath`]: a single numeric `{id}` segment
//! - [`IdPair`]: the `{id}/participate/{user_id}` segments

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use validator::Validate;

use yogastudio_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value.validate().map_err(AppError::validation)?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if let Some(field) = error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid date") {
        return AppError::bad_request(anyhow!("date must be an ISO 8601 date or timestamp"));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// A numeric path id. Anything that does not parse as `T` is a 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: FromStr,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid id")))?;

        parse_id(&raw).map(IdPath)
    }
}

/// Two numeric path ids, in route order.
#[derive(Debug, Clone, Copy)]
pub struct IdPair<A, B>(pub A, pub B);

impl<A, B, S> FromRequestParts<S> for IdPair<A, B>
where
    A: FromStr,
    B: FromStr,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid id")))?;

        Ok(IdPair(parse_id(&first)?, parse_id(&second)?))
    }
}

fn parse_id<T: FromStr>(raw: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(anyhow!("Invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "name is too short"))]
        name: String,
    }

    async fn probe(ValidatedJson(probe): ValidatedJson<Probe>) -> String {
        probe.name
    }

    async fn one(IdPath(id): IdPath<i64>) -> String {
        id.to_string()
    }

    async fn two(IdPair(a, b): IdPair<i64, i64>) -> String {
        format!("{}:{}", a, b)
    }

    fn app() -> Router {
        Router::new()
            .route("/probe", post(probe))
            .route("/items/{id}", get(one))
            .route("/items/{id}/participate/{user_id}", get(two))
    }

    async fn send(request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn json_post(body: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/probe")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_uri(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_validated_json_accepts_valid_body() {
        let (status, body) = send(json_post(r#"{"name":"Hatha"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hatha");
    }

    #[tokio::test]
    async fn test_validated_json_rejects_invalid_body_with_400() {
        let (status, body) = send(json_post(r#"{"name":"ab"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("name is too short"));
    }

    #[tokio::test]
    async fn test_validated_json_reports_missing_field() {
        let (status, body) = send(json_post("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("name is required"));
    }

    #[tokio::test]
    async fn test_validated_json_rejects_malformed_json() {
        let (status, _) = send(json_post("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_id_path_parses_number() {
        let (status, body) = send(get_uri("/items/42")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_id_path_rejects_non_numeric() {
        let (status, body) = send(get_uri("/items/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid id"));
    }

    #[tokio::test]
    async fn test_id_pair_parses_both_segments() {
        let (status, body) = send(get_uri("/items/3/participate/9")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "3:9");

        let (status, _) = send(get_uri("/items/3/participate/nine")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
