//! Registration, login, and token handling over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_login_me() {
    let app = TestApp::new();
    let (_, user_id) = app.register("ana@example.com", "Ana").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": "ana@example.com",
                "password": "correct horse battery",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);
    let token = login.body["data"]["token"]["token"]
        .as_str()
        .expect("token")
        .to_string();

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], json!(user_id));
    assert_eq!(me.body["data"]["email"], json!("ana@example.com"));
    // The password hash must never appear in responses.
    assert!(me.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("ana@example.com", "Ana").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "email": "ana@example.com",
                "password": "correct horse battery",
                "display_name": "Other Ana",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("CONFLICT"));
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register("ana@example.com", "Ana").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": "ana@example.com",
                "password": "nope nope nope",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], json!("AUTHENTICATION"));
}

#[tokio::test]
async fn test_weak_password_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "email": "ana@example.com",
                "password": "short",
                "display_name": "Ana",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION"));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new();

    let no_token = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(no_token.status, StatusCode::UNAUTHORIZED);

    let bad_token = app
        .request("GET", "/api/auth/me", None, Some("not-a-jwt"))
        .await;
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);
}
