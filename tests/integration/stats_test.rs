//! Profiles and contribution statistics over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn complete_with_rating(app: &TestApp, requester: &str, helper: &str, stars: u8) {
    let id = app.create_request(requester).await;
    app.request(
        "POST",
        &format!("/api/requests/{id}/claim"),
        Some(json!({})),
        Some(helper),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/requests/{id}/complete"),
        Some(json!({})),
        Some(helper),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/requests/{id}/verify"),
        Some(json!({ "approved": true })),
        Some(requester),
    )
    .await;
    let rated = app
        .request(
            "POST",
            &format!("/api/requests/{id}/rating"),
            Some(json!({ "stars": stars })),
            Some(requester),
        )
        .await;
    assert_eq!(rated.status, StatusCode::OK, "{:?}", rated.body);
}

#[tokio::test]
async fn test_stats_reflect_completed_work() {
    let app = TestApp::new();
    let (requester, requester_id) = app.register("ana@example.com", "Ana").await;
    let (helper, helper_id) = app.register("bo@example.com", "Bo").await;

    complete_with_rating(&app, &requester, &helper, 5).await;
    complete_with_rating(&app, &requester, &helper, 4).await;

    let stats = app
        .request(
            "GET",
            &format!("/api/users/{helper_id}/stats"),
            None,
            Some(&helper),
        )
        .await;
    assert_eq!(stats.status, StatusCode::OK, "{:?}", stats.body);
    let data = &stats.body["data"];
    assert_eq!(data["requests_claimed"], json!(2));
    assert_eq!(data["completions"], json!(2));
    assert_eq!(data["ratings_received"], json!(2));
    assert_eq!(data["average_rating"], json!(4.5));
    assert_eq!(data["five_star_count"], json!(1));
    assert_eq!(data["high_urgency_completions"], json!(2));

    let creator_stats = app
        .request(
            "GET",
            &format!("/api/users/{requester_id}/stats"),
            None,
            Some(&requester),
        )
        .await;
    assert_eq!(creator_stats.body["data"]["requests_created"], json!(2));
    assert_eq!(creator_stats.body["data"]["completions"], json!(0));
}

#[tokio::test]
async fn test_badges_use_configured_thresholds() {
    let mut config = crate::helpers::test_config();
    config.achievements.super_helper = 2;
    let app = TestApp::with_config(config);

    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, helper_id) = app.register("bo@example.com", "Bo").await;

    complete_with_rating(&app, &requester, &helper, 5).await;
    complete_with_rating(&app, &requester, &helper, 5).await;

    let stats = app
        .request(
            "GET",
            &format!("/api/users/{helper_id}/stats"),
            None,
            Some(&helper),
        )
        .await;
    let badges: Vec<&str> = stats.body["data"]["badges"]
        .as_array()
        .expect("badges array")
        .iter()
        .filter_map(|b| b["name"].as_str())
        .collect();
    assert!(
        badges.contains(&"Super Helper"),
        "badges were {badges:?}"
    );
}

#[tokio::test]
async fn test_community_snapshot() {
    let app = TestApp::new();
    let (requester, _) = app.register("ana@example.com", "Ana").await;
    let (helper, _) = app.register("bo@example.com", "Bo").await;

    complete_with_rating(&app, &requester, &helper, 5).await;
    app.create_request(&requester).await;

    let snapshot = app
        .request("GET", "/api/stats/community", None, Some(&helper))
        .await;
    assert_eq!(snapshot.status, StatusCode::OK, "{:?}", snapshot.body);
    assert_eq!(snapshot.body["data"]["total_requests"], json!(2));
    assert_eq!(snapshot.body["data"]["total_completed"], json!(1));
}

#[tokio::test]
async fn test_profile_update() {
    let app = TestApp::new();
    let (token, user_id) = app.register("ana@example.com", "Ana").await;

    let updated = app
        .request(
            "PUT",
            "/api/users/me",
            Some(json!({
                "display_name": "Ana M.",
                "neighborhood": "Riverside",
                "skills": ["gardening", "driving"],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.body["data"]["display_name"], json!("Ana M."));

    let (other, _) = app.register("bo@example.com", "Bo").await;
    let fetched = app
        .request("GET", &format!("/api/users/{user_id}"), None, Some(&other))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["display_name"], json!("Ana M."));
    assert_eq!(fetched.body["data"]["neighborhood"], json!("Riverside"));
}

#[tokio::test]
async fn test_blank_display_name_rejected() {
    let app = TestApp::new();
    let (token, _) = app.register("ana@example.com", "Ana").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(json!({ "display_name": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION"));
}
