//! Application state
//!
//! `AppState` is the one value shared across requests: the store handles
//! and the read-only JWT configuration. The `FromRef` implementations let
//! handlers extract only the piece they need instead of the whole state,
//! following Axum's recommended pattern.
//!
//! The stores are held behind `Arc<dyn ...>` so the HTTP layer depends on
//! the store capabilities, not on a particular backend; production wires
//! in the Postgres stores, tests wire in in-memory ones.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::users::UserStore;
use crate::orders::db::OrderStore;
use crate::server::config::JwtConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,

    /// Order store
    pub orders: Arc<dyn OrderStore>,

    /// JWT signing configuration, loaded once at startup, never mutated
    pub jwt: JwtConfig,
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn OrderStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.orders.clone()
    }
}

impl FromRef<AppState> for JwtConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
