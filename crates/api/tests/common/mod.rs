#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use settings_core::store::{InMemorySettingsStore, UserSettingsStore};
use settings_core::types::DbId;
use tower::ServiceExt;

use settings_api::auth::jwt::{generate_access_token, JwtConfig};
use settings_api::config::ServerConfig;
use settings_api::router::build_app_router;
use settings_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router around the given settings store.
pub fn build_test_app(store: Arc<dyn UserSettingsStore>) -> Router {
    let config = test_config();
    let state = AppState {
        settings: store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Convenience: a fresh in-memory store plus an app wired to it.
pub fn app_with_memory_store() -> (Router, Arc<InMemorySettingsStore>) {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = build_test_app(store.clone());
    (app, store)
}

/// `Authorization` header value for the given user.
pub fn bearer(user_id: DbId) -> String {
    let token = generate_access_token(user_id, "member", &test_config().jwt)
        .expect("token generation should succeed");
    format!("Bearer {token}")
}

/// Send a request as `user_id` with an optional raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: DbId,
    body: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", bearer(user_id));

    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_owned())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a JSON body as `user_id`.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    user_id: DbId,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, method, uri, user_id, Some(&body.to_string())).await
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
