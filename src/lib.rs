//! Order Management API
//!
//! A minimal order-management backend: users register and log in to
//! obtain a bearer token, then create, read, update, and delete orders
//! they own. Authentication is stateless (signed JWTs); persistence is
//! Postgres behind explicit store capabilities.
//!
//! # Module Structure
//!
//! - **`auth`** - registration/login handlers, credential store, JWT
//!   issuance and validation
//! - **`orders`** - the order resource: model, ownership-scoped store,
//!   CRUD handlers
//! - **`middleware`** - bearer-token guard for the order routes
//! - **`routes`** - router assembly
//! - **`server`** - configuration, application state, app assembly
//! - **`error`** - error taxonomy and wire-shape conversions
//!
//! # Request Flow
//!
//! client → router → auth middleware (token validation, identity
//! extraction) → handler → store → Postgres. Each request is handled
//! independently; the only shared state is the store handles and the
//! read-only JWT configuration.

/// Authentication and user management
pub mod auth;

/// Error types and response conversion
pub mod error;

/// Request middleware
pub mod middleware;

/// Order resource
pub mod orders;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
