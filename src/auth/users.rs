//! User model and credential store
//!
//! The credential store owns password hashing: raw passwords never cross
//! this boundary in either direction, only bcrypt hashes are persisted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;

/// A registered user
///
/// The email doubles as the username and is unique across all users.
/// Users are created at registration and never deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Stable identifier (UUID)
    pub id: Uuid,
    /// Email address; also the ownership scope key for orders
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Credential store capability
///
/// Implementable against any relational backend; the Postgres
/// implementation below is used in production, tests substitute an
/// in-memory one.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a user, hashing the password before it is persisted
    ///
    /// Fails with [`StoreError::Duplicate`] when the email is taken.
    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError>;

    /// Check a password against the stored hash
    async fn verify_password(&self, user: &User, password: &str) -> Result<bool, StoreError>;
}

/// Postgres-backed credential store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(&password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }

    async fn verify_password(&self, user: &User, password: &str) -> Result<bool, StoreError> {
        Ok(bcrypt::verify(password, &user.password_hash)?)
    }
}

/// Translate a unique-constraint violation into [`StoreError::Duplicate`]
///
/// Covers the race where a concurrent registration slips past the
/// handler's pre-check.
fn map_unique_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate,
        _ => StoreError::Database(err),
    }
}
