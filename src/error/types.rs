//! API error types
//!
//! `ApiError` is the handler-facing taxonomy and maps onto the HTTP
//! contract; `StoreError` covers persistence-layer failures and is
//! wrapped by `ApiError::Store`. Conversion to wire responses lives in
//! `error::conversion`.

use axum::http::StatusCode;
use thiserror::Error;

/// Persistence-layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the record
    #[error("record already exists")]
    Duplicate,

    /// Database query failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Handler-facing error taxonomy
///
/// Each variant corresponds to one failure class of the HTTP contract:
/// validation failures map to 400, authentication failures to 401, an
/// absent or unowned resource to 404, and infrastructure failures to a
/// generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input, reported as a single message
    #[error("{0}")]
    Validation(String),

    /// Invalid input, reported as an aggregated list of rule violations
    #[error("validation failed")]
    ValidationErrors(Vec<String>),

    /// Login failure; unknown email and wrong password are identical
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired, or forged bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Resource absent, or owned by someone else
    #[error("not found")]
    NotFound,

    /// Store failure, surfaces as a generic server error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Token issuance failure
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a single-message validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::ValidationErrors(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
