use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use backend::routes::configure_routes;
use backend::shared::config::{parse_config, Config};
use backend::shared::data::db::connect_in_memory;
use backend::shared::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

const TEST_CONFIG: &str = r#"
[database]
path = ":memory:"

[server]
host = "127.0.0.1"
port = 0
"#;

/// Router over a fresh in-memory SQLite database
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = parse_config(TEST_CONFIG).expect("test config");
        assert!(config.server.static_dir.is_none());
        Self::with_config(config).await
    }

    /// API plus the built frontend served from `dir`
    pub async fn serving(dir: &std::path::Path) -> Self {
        let mut config = parse_config(TEST_CONFIG).expect("test config");
        config.server.static_dir = Some(dir.to_string_lossy().into_owned());
        Self::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Self {
        let db = connect_in_memory().await.expect("in-memory database");
        Self {
            router: configure_routes(AppState::new(db, config)),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("router error during test request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}
