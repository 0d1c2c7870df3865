//! Authentication endpoint integration tests
//!
//! Drives register and login through the real router over in-memory
//! stores.

mod common;

use axum::http::StatusCode;
use common::{create_test_server, register_and_login};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn register_succeeds() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@x.com", "password": "Passw0rd!" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User registered successfully.");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let server = create_test_server();

    let request = json!({ "email": "dup@x.com", "password": "Passw0rd!" });
    let first = server.post("/api/auth/register").json(&request).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server.post("/api/auth/register").json(&request).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(second.json::<String>(), "User already exists!");
}

#[tokio::test]
async fn register_aggregates_validation_errors() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "weak@x.com", "password": "abc" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["errors"].as_array().expect("errors array missing");
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&json!("Passwords must be at least 6 characters.")));
}

#[tokio::test]
async fn register_rejects_null_body() {
    let server = create_test_server();

    let response = server
        .post("/api/auth/register")
        .json(&serde_json::Value::Null)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<String>(), "Invalid registration data.");
}

#[tokio::test]
async fn login_returns_token_and_expiration() {
    let server = create_test_server();

    let register = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@x.com", "password": "Passw0rd!" }))
        .await;
    assert_eq!(register.status_code(), StatusCode::OK);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "Passw0rd!" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert!(body["expiration"].as_str().is_some());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let server = create_test_server();

    let register = server
        .post("/api/auth/register")
        .json(&json!({ "email": "known@x.com", "password": "Passw0rd!" }))
        .await;
    assert_eq!(register.status_code(), StatusCode::OK);

    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "unknown@x.com", "password": "Passw0rd!" }))
        .await;
    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "known@x.com", "password": "WrongPass1!" }))
        .await;

    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    // Byte-identical bodies: account enumeration must be impossible.
    assert_eq!(unknown_email.text(), wrong_password.text());
    assert_eq!(unknown_email.json::<String>(), "Invalid credentials.");
}

#[tokio::test]
async fn login_token_is_accepted_by_protected_routes() {
    let server = create_test_server();
    let token = register_and_login(&server, "a@x.com", "Passw0rd!").await;

    let response = server
        .get("/api/orders/all")
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}
