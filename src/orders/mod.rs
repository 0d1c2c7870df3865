//! Orders Module
//!
//! The owned order resource: model, ownership-scoped store, and CRUD
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! orders/
//! ├── mod.rs      - Module exports
//! ├── model.rs    - Order model and wire types
//! ├── db.rs       - OrderStore capability and Postgres implementation
//! └── handlers.rs - HTTP handlers for the order endpoints
//! ```
//!
//! # Ownership
//!
//! An order belongs to exactly one user, keyed by email. Every store
//! operation takes the owner as a parameter and filters on it inside the
//! statement; handlers obtain the owner exclusively from the
//! authenticated identity.

/// Order model and wire types
pub mod model;

/// Order store
pub mod db;

/// HTTP handlers for order endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::{OrderStore, PgOrderStore};
pub use model::{Order, OrderRequest};
