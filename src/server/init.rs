//! Server initialization
//!
//! Builds the application: configuration, database pool, Postgres-backed
//! stores, and the router.

use std::sync::Arc;

use axum::Router;

use crate::auth::users::PgUserStore;
use crate::orders::db::PgOrderStore;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ConfigError, JwtConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// 1. Load the JWT configuration from the environment
/// 2. Connect to Postgres and run pending migrations
/// 3. Assemble the router over the Postgres-backed stores
///
/// Unlike request-time failures, anything that goes wrong here is fatal:
/// the service cannot run without its store or signing key.
pub async fn create_app() -> Result<Router, ConfigError> {
    tracing::info!("Initializing order management server");

    let jwt = JwtConfig::from_env()?;
    let pool = connect_database().await?;

    let app_state = AppState {
        users: Arc::new(PgUserStore::new(pool.clone())),
        orders: Arc::new(PgOrderStore::new(pool)),
        jwt,
    };

    Ok(create_router(app_state))
}
