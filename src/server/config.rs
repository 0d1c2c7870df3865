//! Server configuration
//!
//! Loads the Postgres connection pool and the JWT signing configuration
//! from the environment. Configuration is read once at startup; the
//! `JwtConfig` is never mutated afterwards, so concurrent issue and
//! validate calls share it without locking.
//!
//! # Configuration surface
//!
//! - `DATABASE_URL` - Postgres connection string
//! - `JWT_ISSUER` / `JWT_AUDIENCE` / `JWT_KEY` - token signing settings;
//!   the key is a symmetric secret and must be long enough for HMAC-SHA256
//! - `SERVER_PORT`, `RUST_LOG` - read by the binary, not here

use sqlx::PgPool;
use thiserror::Error;

/// Minimum symmetric key length for HMAC-SHA256
const MIN_JWT_KEY_BYTES: usize = 32;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("JWT_KEY must be at least 32 bytes")]
    KeyTooShort,

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// JWT signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Value of the `iss` claim on issued tokens
    pub issuer: String,
    /// Value of the `aud` claim on issued tokens
    pub audience: String,
    /// Symmetric signing secret; confidential
    pub key: String,
}

impl JwtConfig {
    /// Load the Jwt section from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let issuer = require_var("JWT_ISSUER")?;
        let audience = require_var("JWT_AUDIENCE")?;
        let key = require_var("JWT_KEY")?;

        if key.len() < MIN_JWT_KEY_BYTES {
            return Err(ConfigError::KeyTooShort);
        }

        Ok(Self {
            issuer,
            audience,
            key,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Connect to Postgres and run pending migrations
pub async fn connect_database() -> Result<PgPool, ConfigError> {
    let database_url = require_var("DATABASE_URL")?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
