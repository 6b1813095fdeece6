//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use podcast_api::{AppState, build_app};
use podcast_auth::PasswordHasher;
use podcast_core::config::{AppConfig, DatabaseProvider};
use podcast_core::traits::PasswordHashing;
use podcast_database::Stores;

/// Test application over in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for reaching services directly
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with an empty database
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let hasher: Arc<dyn PasswordHashing> = Arc::new(PasswordHasher::new());
        let stores = Stores::memory(Arc::clone(&hasher));
        let state = AppState::new(config, stores, hasher);

        Self {
            router: build_app(state.clone()),
            state,
        }
    }

    /// Sign up through the API
    pub async fn create_account(&self, email: &str, password: &str, role: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "email": email,
                "password": password,
                "role": role,
            })),
            None,
        )
        .await
    }

    /// Login and return the token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Sign up a host and return their token
    pub async fn host_token(&self) -> String {
        self.create_account("host@example.com", "host-pw", "Host")
            .await;
        self.login("host@example.com", "host-pw").await
    }

    /// Sign up a listener and return their token
    pub async fn listener_token(&self) -> String {
        self.create_account("listener@example.com", "listener-pw", "Listener")
            .await;
        self.login("listener@example.com", "listener-pw").await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
}

impl TestResponse {
    /// The `ok` flag of the outcome body
    pub fn ok(&self) -> bool {
        self.body.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    /// The `error` message of a failed outcome
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
