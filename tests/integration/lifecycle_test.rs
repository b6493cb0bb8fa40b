//! Help-request lifecycle over HTTP: create, claim, complete, verify, rate.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_full_lifecycle() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;

    let id = app.create_request(&requester).await;

    let fetched = app
        .request("GET", &format!("/api/requests/{id}"), None, Some(&requester))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["status"], json!("open"));

    let claimed = app
        .request(
            "POST",
            &format!("/api/requests/{id}/claim"),
            Some(json!({})),
            Some(&helper),
        )
        .await;
    assert_eq!(claimed.status, StatusCode::OK, "{:?}", claimed.body);
    assert_eq!(claimed.body["data"]["status"], json!("claimed"));
    assert_eq!(claimed.body["data"]["claimant_label"], json!("bo@example.com"));

    // Report completion from ~40 m away; within the default 100 m radius.
    let completed = app
        .request(
            "POST",
            &format!("/api/requests/{id}/complete"),
            Some(json!({ "position": { "lat": 51.50036, "lng": -0.12 } })),
            Some(&helper),
        )
        .await;
    assert_eq!(completed.status, StatusCode::OK, "{:?}", completed.body);
    assert_eq!(
        completed.body["data"]["status"],
        json!("pending_completion")
    );
    assert_eq!(completed.body["data"]["verification"]["verified"], json!(true));

    let verified = app
        .request(
            "POST",
            &format!("/api/requests/{id}/verify"),
            Some(json!({ "approved": true })),
            Some(&requester),
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK, "{:?}", verified.body);
    assert_eq!(verified.body["data"]["status"], json!("completed"));

    let rated = app
        .request(
            "POST",
            &format!("/api/requests/{id}/rating"),
            Some(json!({ "stars": 5, "review": "Fast and friendly" })),
            Some(&requester),
        )
        .await;
    assert_eq!(rated.status, StatusCode::OK, "{:?}", rated.body);
    assert_eq!(rated.body["data"]["rating"]["stars"], json!(5));

    // The history log records every transition in order.
    let events: Vec<&str> = rated.body["data"]["history"]
        .as_array()
        .expect("history array")
        .iter()
        .filter_map(|e| e["event"].as_str())
        .collect();
    assert_eq!(
        events,
        vec!["created", "claimed", "marked_complete", "verified_complete"]
    );
}

#[tokio::test]
async fn test_cannot_claim_own_request() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let id = app.create_request(&requester).await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/claim"),
            Some(json!({})),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], json!("FORBIDDEN"));
}

#[tokio::test]
async fn test_second_claim_is_conflict() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (first, _) = app.register("bo@example.com", "Bo").await;
    let (second, _) = app.register("caro@example.com", "Caro").await;
    let id = app.create_request(&requester).await;

    let won = app
        .request(
            "POST",
            &format!("/api/requests/{id}/claim"),
            Some(json!({})),
            Some(&first),
        )
        .await;
    assert_eq!(won.status, StatusCode::OK);

    let lost = app
        .request(
            "POST",
            &format!("/api/requests/{id}/claim"),
            Some(json!({})),
            Some(&second),
        )
        .await;
    assert_eq!(lost.status, StatusCode::CONFLICT);
    assert_eq!(lost.body["error"], json!("ALREADY_CLAIMED"));
}

#[tokio::test]
async fn test_only_claimant_reports_completion() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = app.create_request(&requester).await;

    app.request(
        "POST",
        &format!("/api/requests/{id}/claim"),
        Some(json!({})),
        Some(&helper),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/complete"),
            Some(json!({})),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rejection_returns_to_claimed() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = app.create_request(&requester).await;

    app.request(
        "POST",
        &format!("/api/requests/{id}/claim"),
        Some(json!({})),
        Some(&helper),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/requests/{id}/complete"),
        Some(json!({})),
        Some(&helper),
    )
    .await;

    let rejected = app
        .request(
            "POST",
            &format!("/api/requests/{id}/verify"),
            Some(json!({ "approved": false, "reason": "Bags are still downstairs" })),
            Some(&requester),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::OK, "{:?}", rejected.body);
    assert_eq!(rejected.body["data"]["status"], json!("claimed"));
    // The claimant keeps the claim and can report again.
    assert_eq!(rejected.body["data"]["claimant_label"], json!("bo@example.com"));
}

#[tokio::test]
async fn test_rating_only_once() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = app.create_request(&requester).await;

    app.request(
        "POST",
        &format!("/api/requests/{id}/claim"),
        Some(json!({})),
        Some(&helper),
    )
    .await;
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

    let first = app
        .request(
            "POST",
            &format!("/api/requests/{id}/rating"),
            Some(json!({ "stars": 4 })),
            Some(&requester),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            &format!("/api/requests/{id}/rating"),
            Some(json!({ "stars": 5 })),
            Some(&requester),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], json!("CONFLICT"));
}

#[tokio::test]
async fn test_verify_before_completion_report_is_invalid() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;
    let id = app.create_request(&requester).await;

    app.request(
        "POST",
        &format!("/api/requests/{id}/claim"),
        Some(json!({})),
        Some(&helper),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/requests/{id}/verify"),
            Some(json!({ "approved": true })),
            Some(&requester),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("INVALID_TRANSITION"));
}

#[tokio::test]
async fn test_unknown_request_is_not_found() {
    let app = TestApp::new();
    let (token, _) = app.register("ana@example.com", "Ana").await;

    let response = app
        .request(
            "GET",
            "/api/requests/00000000-0000-0000-0000-000000000000",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_create_validates_title() {
    let app = TestApp::new();
    let (token, _) = app.register("ana@example.com", "Ana").await;

    let response = app
        .request(
            "POST",
            "/api/requests",
            Some(json!({
                "title": "Hi",
                "description": "This description is long enough to pass validation.",
                "category": "Other",
                "location": { "kind": "plain_text", "address": "4 Maple Ave" },
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION"));
}

#[tokio::test]
async fn test_list_filters_by_urgency() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;

    // One high-urgency request via the helper, one low-urgency by hand.
    app.create_request(&requester).await;
    let low = app
        .request(
            "POST",
            "/api/requests",
            Some(json!({
                "title": "Water my plants",
                "description": "Two pots on the balcony, once while I am away this week.",
                "category": "Other",
                "urgency": "low",
                "location": { "kind": "plain_text", "address": "4 Maple Ave" },
            })),
            Some(&requester),
        )
        .await;
    assert_eq!(low.status, StatusCode::OK);

    let all = app.request("GET", "/api/requests", None, Some(&requester)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"]["total_items"], json!(2));

    let high = app
        .request("GET", "/api/requests?urgency=high", None, Some(&requester))
        .await;
    assert_eq!(high.status, StatusCode::OK, "{:?}", high.body);
    assert_eq!(high.body["data"]["total_items"], json!(1));
    assert_eq!(
        high.body["data"]["items"][0]["title"],
        json!("Help carrying groceries")
    );
}
