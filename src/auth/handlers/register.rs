//! Registration handler
//!
//! Implements POST /api/auth/register. Rejected registrations report
//! every violated rule at once; the messages are part of the client
//! contract. No token is issued on registration.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::users::UserStore;
use crate::error::{json_body, ApiError, StoreError};

/// Minimum password length accepted at registration
const MIN_PASSWORD_LEN: usize = 6;

/// Collect every violated registration rule
///
/// Returns an empty list for acceptable input.
fn validation_errors(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if email.is_empty() || !email.contains('@') {
        errors.push(format!("Email '{}' is invalid.", email));
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.push("Passwords must be at least 6 characters.".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push("Passwords must have at least one non alphanumeric character.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Passwords must have at least one digit ('0'-'9').".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
    }

    errors
}

/// Registration handler
///
/// # Errors
///
/// * `400` `"Invalid registration data."` - body absent or JSON null
/// * `400` `"User already exists!"` - email already registered
/// * `400` `{"errors": [...]}` - aggregated validation failures
pub async fn register(
    State(users): State<Arc<dyn UserStore>>,
    body: Result<Json<Option<RegisterRequest>>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = json_body(body, "Invalid registration data.")?;
    tracing::info!("Registration request for: {}", request.email);

    // Check if the email is already registered
    if users.find_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::validation("User already exists!"));
    }

    let errors = validation_errors(&request.email, &request.password);
    if !errors.is_empty() {
        tracing::warn!(
            "Registration rejected for {}: {} rule(s) violated",
            request.email,
            errors.len()
        );
        return Err(ApiError::ValidationErrors(errors));
    }

    match users.create(&request.email, &request.password).await {
        Ok(user) => {
            tracing::info!("User registered: {}", user.email);
            Ok(Json(MessageResponse {
                message: "User registered successfully.".to_string(),
            }))
        }
        // A concurrent registration can slip past the pre-check and trip
        // the unique constraint instead.
        Err(StoreError::Duplicate) => Err(ApiError::validation("User already exists!")),
        Err(err) => Err(err.into()),
    }
}
