//! Order route configuration
//!
//! The whole subtree sits behind the bearer-token middleware, so no
//! order handler is reachable without a validated identity.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::middleware::auth::auth_middleware;
use crate::orders::handlers::{
    delete_order, get_all_orders, get_order, place_order, update_order,
};
use crate::server::state::AppState;

/// Configure order routes
///
/// - `POST /api/orders/place` - place a new order
/// - `GET /api/orders/all` - list the caller's orders
/// - `GET /api/orders/{id}` - fetch one owned order
/// - `PUT /api/orders/{id}` - overwrite an owned order
/// - `DELETE /api/orders/{id}` - delete an owned order
pub fn order_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/orders/place", post(place_order))
        .route("/api/orders/all", get(get_all_orders))
        .route(
            "/api/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
