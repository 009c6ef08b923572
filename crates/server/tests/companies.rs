mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post, register_company, test_app};

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_new_companies_await_approval() {
    let app = test_app().await;
    register_company(&app, "Acme").await;
    register_company(&app, "Globex").await;

    let (status, body) = get(&app, "/companies/awaiting_approval").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Acme", "Globex"]));
}

#[tokio::test]
async fn test_approve_company_is_idempotent() {
    let app = test_app().await;
    let acme = register_company(&app, "Acme").await;
    register_company(&app, "Globex").await;

    for _ in 0..2 {
        let (status, body) = post(&app, "/companies/approve", json!({ "company_id": acme })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Company approved successfully" }));
    }

    let (_, company) = get(&app, &format!("/companies/{acme}")).await;
    assert_eq!(company["approved"], json!(true));
    let (_, pending) = get(&app, "/companies/awaiting_approval").await;
    assert_eq!(pending, json!(["Globex"]));
}

#[tokio::test]
async fn test_reject_company_deletes_it() {
    let app = test_app().await;
    let acme = register_company(&app, "Acme").await;

    let (status, body) = post(&app, "/companies/reject", json!({ "company_id": acme })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Company rejected successfully" }));

    let (status, body) = get(&app, &format!("/companies/{acme}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Company not found" }));
    let (_, pending) = get(&app, "/companies/awaiting_approval").await;
    assert_eq!(pending, json!([]));
}

#[tokio::test]
async fn test_unknown_company_is_not_found_and_nothing_changes() {
    let app = test_app().await;
    let acme = register_company(&app, "Acme").await;
    let missing = acme + 1000;

    for uri in ["/companies/approve", "/companies/reject"] {
        let (status, body) = post(&app, uri, json!({ "company_id": missing })).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "message": "Company not found" }));
    }

    let (_, pending) = get(&app, "/companies/awaiting_approval").await;
    assert_eq!(pending, json!(["Acme"]));
}

#[tokio::test]
async fn test_missing_company_id_is_bad_request() {
    let app = test_app().await;

    let (status, body) = post(&app, "/companies/approve", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "company_id is required" }));
}

#[tokio::test]
async fn test_duplicate_company_name_conflicts() {
    let app = test_app().await;
    register_company(&app, "Acme").await;

    let (status, body) = post(
        &app,
        "/companies",
        json!({ "name": "Acme", "password": "another" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "message": "Company name already exists" }));
    let (_, pending) = get(&app, "/companies/awaiting_approval").await;
    assert_eq!(pending, json!(["Acme"]));
}

#[tokio::test]
async fn test_register_company_requires_fields() {
    let app = test_app().await;

    let (status, body) = post(&app, "/companies", json!({ "name": "Acme" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Name and password are required" }));
}

#[tokio::test]
async fn test_mistyped_company_id_gets_json_error_body() {
    let app = test_app().await;
    register_company(&app, "Acme").await;

    let (status, body) = post(&app, "/companies/approve", json!({ "company_id": "1" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["message"].as_str().expect("error body should carry a message");
    assert!(message.contains("company_id"), "{message}");
    let (_, pending) = get(&app, "/companies/awaiting_approval").await;
    assert_eq!(pending, json!(["Acme"]));
}
