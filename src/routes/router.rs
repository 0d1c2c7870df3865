//! Router assembly
//!
//! Combines the public auth routes and the protected order routes into
//! the application router.

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::auth_routes::auth_routes;
use crate::routes::order_routes::order_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured
///
/// Order routes are mounted behind the auth middleware; auth routes are
/// public. Unknown paths fall through to a plain 404 and every request
/// is traced at the HTTP layer.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(order_routes(app_state.clone()))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
