//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use neighborly_api::{AppState, build_router};
use neighborly_core::config::AppConfig;
use neighborly_database::Store;

/// Build a default test configuration with the memory backend.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: Default::default(),
        auth: Default::default(),
        lifecycle: Default::default(),
        achievements: Default::default(),
        realtime: Default::default(),
        logging: Default::default(),
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application backed by the memory store.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config, Store::memory());
        Self {
            router: build_router(state),
        }
    }

    /// Register a user and return their access token and id.
    pub async fn register(&self, email: &str, display_name: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({
                    "email": email,
                    "password": "correct horse battery",
                    "display_name": display_name,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Register failed: {:?}",
            response.body
        );

        let token = response.body["data"]["token"]["token"]
            .as_str()
            .expect("No token in register response")
            .to_string();
        let user_id = response.body["data"]["user"]["id"]
            .as_str()
            .expect("No user id in register response")
            .to_string();
        (token, user_id)
    }

    /// Create a geocoded high-urgency help request and return its id.
    pub async fn create_request(&self, token: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/requests",
                Some(json!({
                    "title": "Help carrying groceries",
                    "description": "Need a hand carrying several bags up three flights of stairs.",
                    "category": "Groceries & Shopping",
                    "urgency": "high",
                    "location": {
                        "kind": "geocoded",
                        "address": "4 Maple Ave",
                        "point": { "lat": 51.5, "lng": -0.12 },
                    },
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create request failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("No request id in create response")
            .to_string()
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
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

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
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
