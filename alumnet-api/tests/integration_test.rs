/// Integration tests for the Alumnet API
///
/// These drive the full router in-process against an in-memory store:
/// - Liveness probe
/// - Profile read and overwrite round-trip
/// - Mentor directory search and connection requests
/// - Job board search and applications
/// - Notification side effects and ordering
/// - Static front-end fallback

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;
use tower::Service as _;

#[tokio::test]
async fn test_ping() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.app.clone().call(common::get("/api/ping")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_get_profile_returns_seeded_user() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.app.clone().call(common::get("/api/user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["full_name"], "Priya Sharma");
    assert_eq!(body["user"]["company"], "TCS");
    assert_eq!(body["user"]["available_for_mentorship"], 1);
}

#[tokio::test]
async fn test_get_profile_unseeded_returns_null_user() {
    let ctx = TestContext::unseeded().await.unwrap();

    let response = ctx.app.clone().call(common::get("/api/user")).await.unwrap();

    // Absence of the profile is not an error
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn test_profile_update_roundtrip() {
    let ctx = TestContext::new().await.unwrap();

    let payload = json!({
        "full_name": "Priya S.",
        "current_role": "Staff Engineer",
        "company": "Infosys",
        "skills": "Rust, SQL",
        "bio": "Updated bio",
        "available_for_mentorship": true
    });

    let response = ctx
        .app
        .clone()
        .call(common::post_json("/api/user", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["user"]["full_name"], "Priya S.");
    assert_eq!(body["user"]["available_for_mentorship"], 1);

    // A subsequent read sees the same six fields
    let response = ctx.app.clone().call(common::get("/api/user")).await.unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["user"]["full_name"], "Priya S.");
    assert_eq!(body["user"]["current_role"], "Staff Engineer");
    assert_eq!(body["user"]["company"], "Infosys");
    assert_eq!(body["user"]["skills"], "Rust, SQL");
    assert_eq!(body["user"]["bio"], "Updated bio");
    assert_eq!(body["user"]["available_for_mentorship"], 1);
}

#[tokio::test]
async fn test_profile_update_overwrites_missing_fields_with_null() {
    let ctx = TestContext::new().await.unwrap();

    // Omitted fields are written as NULL; a false-y flag normalizes to 0
    let response = ctx
        .app
        .clone()
        .call(common::post_json("/api/user", json!({ "full_name": "Priya S." })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["user"]["full_name"], "Priya S.");
    assert!(body["user"]["company"].is_null());
    assert!(body["user"]["bio"].is_null());
    assert_eq!(body["user"]["available_for_mentorship"], 0);
}

#[tokio::test]
async fn test_profile_update_appends_notification() {
    let ctx = TestContext::new().await.unwrap();

    ctx.app
        .clone()
        .call(common::post_json("/api/user", json!({ "full_name": "Priya S." })))
        .await
        .unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/api/notifications"))
        .await
        .unwrap();
    let body = common::body_json(response).await;

    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["message"], "Profile updated successfully.");
    assert_eq!(notifications[0]["user_id"], 1);
    assert_eq!(notifications[0]["is_read"], 0);

    // Exactly one row landed in the store
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notifications")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_mentor_search_filters_by_substring() {
    let ctx = TestContext::new().await.unwrap();

    // "ai" hits Rajesh Kumar through "AI/ML" in his skills and nobody else
    let response = ctx
        .app
        .clone()
        .call(common::get("/api/mentors?q=ai"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let mentors = body["mentors"].as_array().unwrap();
    assert_eq!(mentors.len(), 1);
    assert_eq!(mentors[0]["full_name"], "Rajesh Kumar");
}

#[tokio::test]
async fn test_mentor_search_without_query_returns_all() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.app.clone().call(common::get("/api/mentors")).await.unwrap();
    let body = common::body_json(response).await;

    assert_eq!(body["mentors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_connect_records_notification() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::post_json(
            "/api/connect",
            json!({ "mentorName": "Rajesh Kumar" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Connection request sent to Rajesh Kumar");

    let response = ctx
        .app
        .clone()
        .call(common::get("/api/notifications"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0]["message"],
        "Connection request sent to Rajesh Kumar"
    );
}

#[tokio::test]
async fn test_job_search_by_company() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/api/jobs?q=google"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let jobs = body["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Product Manager - AI Products");
    assert_eq!(jobs[0]["company"], "Google");
}

#[tokio::test]
async fn test_apply_to_unknown_job_still_succeeds() {
    let ctx = TestContext::new().await.unwrap();

    // No job with id 7 exists; applying is not validated against the board
    let response = ctx
        .app
        .clone()
        .call(common::post_json("/api/jobs/7/apply", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body, json!({ "ok": true }));

    let response = ctx
        .app
        .clone()
        .call(common::get("/api/notifications"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["notifications"][0]["message"], "Applied to job ID 7");
}

#[tokio::test]
async fn test_notifications_listed_newest_first() {
    let ctx = TestContext::new().await.unwrap();

    ctx.app
        .clone()
        .call(common::post_json(
            "/api/connect",
            json!({ "mentorName": "Anita Sharma" }),
        ))
        .await
        .unwrap();
    ctx.app
        .clone()
        .call(common::post_json("/api/jobs/2/apply", json!({})))
        .await
        .unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/api/notifications"))
        .await
        .unwrap();
    let body = common::body_json(response).await;

    let messages: Vec<_> = body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Applied to job ID 2",
            "Connection request sent to Anita Sharma"
        ]
    );
}

#[tokio::test]
async fn test_fallback_serves_front_end_entry() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .app
        .clone()
        .call(common::get("/some/client-side/route"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_text(response).await;
    assert!(body.contains("<!DOCTYPE html>"));
}
