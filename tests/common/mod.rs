//! Shared test fixtures
//!
//! In-memory store implementations and helpers for driving the full
//! router — auth middleware included — without a database.

#![allow(dead_code)]

pub mod stores;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use ordermgmt::routes::router::create_router;
use ordermgmt::server::config::JwtConfig;
use ordermgmt::server::state::AppState;

use self::stores::{MemoryOrderStore, MemoryUserStore};

/// JWT configuration used by every test server
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "https://orders.test".to_string(),
        audience: "orders-api".to_string(),
        key: "test-signing-key-0123456789abcdef".to_string(),
    }
}

/// Spin up the app over fresh in-memory stores
pub fn create_test_server() -> TestServer {
    let app_state = AppState {
        users: Arc::new(MemoryUserStore::new()),
        orders: Arc::new(MemoryOrderStore::new()),
        jwt: test_jwt_config(),
    };
    TestServer::new(create_router(app_state)).expect("Failed to start test server")
}

/// Register an account and log it in, returning the bearer token
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["token"].as_str().expect("token missing").to_string()
}
