mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post, test_app};

#[tokio::test]
async fn test_create_admin_then_list() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/admin/create",
        json!({ "username": "alice", "password": "secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Admin created successfully" }));

    let (status, body) = get(&app, "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["alice"]));
}

#[tokio::test]
async fn test_create_admin_missing_fields_creates_nothing() {
    let app = test_app().await;

    for payload in [
        json!({ "username": "alice" }),
        json!({ "password": "secret" }),
        json!({ "username": "", "password": "secret" }),
        json!({}),
    ] {
        let (status, body) = post(&app, "/admin/create", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({ "message": "Username and password are required" }));
    }

    let (_, body) = get(&app, "/admin").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_duplicate_admin_username_conflicts() {
    let app = test_app().await;
    let payload = json!({ "username": "alice", "password": "secret" });
    post(&app, "/admin/create", payload.clone()).await;

    let (status, body) = post(&app, "/admin/create", payload).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "message": "Admin username already exists" }));
    let (_, body) = get(&app, "/admin").await;
    assert_eq!(body, json!(["alice"]));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = test_app().await;

    let (status, body) = common::send(
        &app,
        axum::http::Method::POST,
        "/admin/create",
        Some(json!("not an object")),
    )
    .await;

    assert!(status.is_client_error());
    assert!(body["message"].is_string(), "{body}");
    let (_, body) = get(&app, "/admin").await;
    assert_eq!(body, json!([]));
}
