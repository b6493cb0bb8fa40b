//! Message threads between requester and claimant.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn claimed_request(app: &TestApp, requester: &str, helper: &str) -> String {
    let id = app.create_request(requester).await;
    let claimed = app
        .request(
            "POST",
            &format!("/api/requests/{id}/claim"),
            Some(json!({})),
            Some(helper),
        )
        .await;
    assert_eq!(claimed.status, StatusCode::OK, "{:?}", claimed.body);
    id
}

#[tokio::test]
async fn test_thread_between_parties() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = claimed_request(&app, &requester, &helper).await;

    let sent = app
        .request(
            "POST",
            &format!("/api/requests/{id}/messages"),
            Some(json!({ "body": "On my way, be there in ten." })),
            Some(&helper),
        )
        .await;
    assert_eq!(sent.status, StatusCode::OK, "{:?}", sent.body);
    assert_eq!(sent.body["data"]["sender_label"], json!("bo@example.com"));

    let thread = app
        .request(
            "GET",
            &format!("/api/requests/{id}/messages"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(thread.status, StatusCode::OK);
    assert_eq!(thread.body["data"].as_array().map(Vec::len), Some(1));

    let unread = app
        .request("GET", "/api/messages/unread-count", None, Some(&requester))
        .await;
    assert_eq!(unread.body["data"]["count"], json!(1));

    let marked = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/messages/read"),
            Some(json!({})),
            Some(&requester),
        )
        .await;
    assert_eq!(marked.status, StatusCode::OK);
    assert_eq!(marked.body["data"]["count"], json!(1));

    let unread = app
        .request("GET", "/api/messages/unread-count", None, Some(&requester))
        .await;
    assert_eq!(unread.body["data"]["count"], json!(0));
}

#[tokio::test]
async fn test_outsider_cannot_message() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let (outsider, _) = app.register("caro@example.com", "Caro").await;
    let id = claimed_request(&app, &requester, &helper).await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/messages"),
            Some(json!({ "body": "Can I help too?" })),
            Some(&outsider),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_no_messages_before_claim() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let id = app.create_request(&requester).await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/messages"),
            Some(json!({ "body": "Anyone out there?" })),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("INVALID_TRANSITION"));
}

#[tokio::test]
async fn test_thread_closes_after_completion() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = claimed_request(&app, &requester, &helper).await;

    app.request(
        "POST",
        &format!("/api/requests/{id}/complete"),
        Some(json!({})),
        Some(&helper),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/requests/{id}/verify"),
        Some(json!({ "approved": true })),
        Some(&requester),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/messages"),
            Some(json!({ "body": "One more thing..." })),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("INVALID_TRANSITION"));
}
