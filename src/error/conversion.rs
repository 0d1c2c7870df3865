//! Error conversion
//!
//! `IntoResponse` for `ApiError`, plus glue for JSON request bodies. The
//! wire shapes are part of the client contract: single validation
//! messages and the login failure are bare JSON strings, aggregated
//! validation errors are `{"errors":[...]}`, every token failure is the
//! fixed challenge object, and not-found/server errors carry no body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

/// Fixed challenge returned for every bearer-token failure
///
/// The body is identical whether the token was absent, malformed,
/// expired, or signature-invalid.
pub fn unauthorized_challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "status": 401,
            "message": "Unauthorized. Token is missing or invalid.",
        })),
    )
        .into_response()
}

/// Unwrap a JSON request body
///
/// A missing, malformed, or literal-`null` body is reported as a 400
/// with the handler's message, matching the contract's treatment of
/// null payloads.
pub fn json_body<T>(
    body: Result<Json<Option<T>>, JsonRejection>,
    message: &str,
) -> Result<T, ApiError> {
    match body {
        Ok(Json(Some(value))) => Ok(value),
        _ => Err(ApiError::validation(message)),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(message) => (status, Json(message)).into_response(),
            ApiError::ValidationErrors(errors) => {
                (status, Json(serde_json::json!({ "errors": errors }))).into_response()
            }
            ApiError::InvalidCredentials => (status, Json("Invalid credentials.")).into_response(),
            ApiError::Unauthorized => unauthorized_challenge(),
            ApiError::NotFound => status.into_response(),
            ApiError::Store(err) => {
                tracing::error!("Store error: {:?}", err);
                status.into_response()
            }
            ApiError::Token(err) => {
                tracing::error!("Token issuance failed: {:?}", err);
                status.into_response()
            }
        }
    }
}
