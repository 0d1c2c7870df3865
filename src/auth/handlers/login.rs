//! Login handler
//!
//! Implements POST /api/auth/login. Unknown email and wrong password
//! produce byte-identical 401 responses so accounts cannot be
//! enumerated. On success the response carries a fresh bearer token and
//! its expiry.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::tokens;
use crate::error::{json_body, ApiError};
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400` `"Invalid login data."` - body absent or JSON null
/// * `401` `"Invalid credentials."` - unknown email or wrong password,
///   indistinguishable by design
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Option<LoginRequest>>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = json_body(body, "Invalid login data.")?;
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email");
            ApiError::InvalidCredentials
        })?;

    let valid = state.users.verify_password(&user, &request.password).await?;
    if !valid {
        tracing::warn!("Login failed: wrong password for {}", user.email);
        return Err(ApiError::InvalidCredentials);
    }

    let (token, expiration) = tokens::issue(&state.jwt, &user)?;
    tracing::info!("User logged in: {}", user.email);

    Ok(Json(LoginResponse { token, expiration }))
}
