//! Notification delivery and read tracking.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_claim_notifies_requester() {
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

    let list = app
        .request("GET", "/api/notifications", None, Some(&requester))
        .await;
    assert_eq!(list.status, StatusCode::OK, "{:?}", list.body);
    assert_eq!(list.body["data"]["total_items"], json!(1));

    let notification = &list.body["data"]["items"][0];
    assert_eq!(notification["kind"], json!("request_claimed"));
    assert_eq!(notification["request_id"], json!(id));
    assert_eq!(notification["read"], json!(false));

    // The claimant gets nothing for their own action.
    let helper_list = app
        .request("GET", "/api/notifications", None, Some(&helper))
        .await;
    assert_eq!(helper_list.body["data"]["total_items"], json!(0));
}

#[tokio::test]
async fn test_mark_read_and_read_all() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;

    // Claim and completion report each notify the requester.
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

    let unread = app
        .request(
            "GET",
            "/api/notifications/unread-count",
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(unread.body["data"]["count"], json!(2));

    let list = app
        .request("GET", "/api/notifications", None, Some(&requester))
        .await;
    let first_id = list.body["data"]["items"][0]["id"]
        .as_str()
        .expect("notification id")
        .to_string();

    let marked = app
        .request(
            "PUT",
            &format!("/api/notifications/{first_id}/read"),
            Some(json!({})),
            Some(&requester),
        )
        .await;
    assert_eq!(marked.status, StatusCode::OK);

    let unread = app
        .request(
            "GET",
            "/api/notifications/unread-count",
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(unread.body["data"]["count"], json!(1));

    let all = app
        .request(
            "PUT",
            "/api/notifications/read-all",
            Some(json!({})),
            Some(&requester),
        )
        .await;
    assert_eq!(all.body["data"]["count"], json!(1));

    let unread = app
        .request(
            "GET",
            "/api/notifications/unread-count",
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(unread.body["data"]["count"], json!(0));
}

#[tokio::test]
async fn test_cannot_read_someone_elses_notification() {
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

    let list = app
        .request("GET", "/api/notifications", None, Some(&requester))
        .await;
    let notification_id = list.body["data"]["items"][0]["id"]
        .as_str()
        .expect("notification id")
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification_id}/read"),
            Some(json!({})),
            Some(&helper),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
