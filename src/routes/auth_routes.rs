//! Auth route configuration
//!
//! Public endpoints; no token required.

use axum::{routing::post, Router};

use crate::auth::handlers::{login, register};
use crate::server::state::AppState;

/// Configure authentication routes
///
/// - `POST /api/auth/register` - user registration
/// - `POST /api/auth/login` - user login, returns a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}
