#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use shopdesk_server::api::{AppState, create_router};
use shopdesk_server::db;
use tower::ServiceExt;

pub async fn test_app() -> Router {
    let db = db::in_memory().await.expect("in-memory database");
    create_router(Arc::new(AppState::new(db)))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// Registers a company and returns its id.
pub async fn register_company(app: &Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/companies",
        serde_json::json!({ "name": name, "password": "company-pass" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register {name}: {body}");
    body["id"].as_i64().expect("company id")
}

/// Registers a storefront user and returns its id.
pub async fn register_user(app: &Router, username: &str) -> i64 {
    let (status, body) = post(
        app,
        "/users",
        serde_json::json!({ "username": username, "password": "user-pass" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register {username}: {body}");
    body["id"].as_i64().expect("user id")
}
