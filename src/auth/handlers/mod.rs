//! Authentication HTTP handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`types`** - request and response types

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types and handlers
pub use login::login;
pub use register::register;
pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
