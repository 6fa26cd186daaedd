#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use recruit_api::config::{Environment, ServerConfig};
use recruit_api::router::build_app_router;
use recruit_api::state::AppState;
use recruit_core::application::{Application, NewApplication};
use recruit_core::error::StoreError;
use recruit_core::store::ApplicationStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default),
/// a 30-second request timeout and the development environment.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        environment: Environment::Development,
    }
}

/// Build the full application router backed by PostgreSQL.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// Build the full router over a substitute store; no database involved.
pub fn build_test_app_with_store(store: Arc<dyn ApplicationStore>, config: ServerConfig) -> Router {
    build_app_router(AppState::with_store(store, config))
}

/// Store that behaves like a database which cannot be reached.
pub struct UnreachableStore;

#[async_trait]
impl ApplicationStore for UnreachableStore {
    async fn roll_number_exists(&self, _roll_number: &str) -> Result<bool, StoreError> {
        Err(StoreError::ConnectionFailure("connection refused".into()))
    }

    async fn insert(&self, _application: &NewApplication) -> Result<Application, StoreError> {
        Err(StoreError::ConnectionFailure("connection refused".into()))
    }

    async fn list_newest_first(&self) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::ConnectionFailure("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::ConnectionFailure("connection refused".into()))
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The submission from the walkthrough scenario.
pub fn asha_rao() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "rollNumber": "21CS001",
        "branch": "CSE (CSE)",
        "yearOfStudy": 2,
        "preferredPosition": "Club Member",
        "githubProfile": "https://github.com/asharao"
    })
}
