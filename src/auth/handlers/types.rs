//! Auth request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address; becomes the account's username
    pub email: String,
    /// Password (hashed by the credential store, never persisted raw)
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Generic success message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login: the bearer token and its expiry
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expiration: DateTime<Utc>,
}
