//! Authentication middleware
//!
//! Runs token validation before the order handlers and injects the
//! authenticated identity into request extensions. Every failure —
//! missing header, malformed header, bad signature, wrong
//! issuer/audience, expired token — short-circuits with the same fixed
//! 401 challenge, so clients learn nothing about why a token was
//! rejected.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::validate;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity extracted from a validated token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    /// Ownership scope key (the user's email)
    pub username: String,
}

/// Bearer-token middleware
///
/// 1. Extracts the token from the Authorization header
/// 2. Validates signature, issuer, audience, and expiry
/// 3. Attaches [`AuthenticatedUser`] to request extensions
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let claims = validate(&state.jwt, token).map_err(|e| {
        tracing::warn!("Token rejected: {:?}", e.kind());
        ApiError::Unauthorized
    })?;

    // A token without a usable identity cannot scope any data access.
    if claims.name.is_empty() {
        tracing::warn!("Token carries an empty name claim");
        return Err(ApiError::Unauthorized);
    }
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Token subject is not a valid user id");
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.name,
    });

    Ok(next.run(request).await)
}

/// Extractor handing the authenticated identity to handlers
///
/// Fails with the 401 challenge when the middleware did not run, so no
/// protected handler can execute without an identity.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
