//! Authentication Module
//!
//! User registration and login, bcrypt credential storage, and JWT
//! issuance/validation.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and credential store
//! ├── tokens.rs   - JWT issuance and validation
//! └── handlers/   - HTTP handlers for the auth endpoints
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → validated → user created (hashed
//!    password only); no token is issued
//! 2. **Login**: email + password → credentials verified → signed token
//!    with a 2-hour expiry returned
//! 3. **Requests**: bearer token → validated by the auth middleware →
//!    identity handed to handlers

/// User model and credential store
pub mod users;

/// JWT issuance and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use handlers::{login, register};
pub use users::{PgUserStore, User, UserStore};
