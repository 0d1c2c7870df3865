//! Middleware Module
//!
//! HTTP middleware that runs before handlers. Currently this is the
//! bearer-token authentication guard for the order routes.

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser, AuthUser};
