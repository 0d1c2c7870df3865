//! Route Configuration Module
//!
//! - **`router`** - main router assembly
//! - **`auth_routes`** - public authentication endpoints
//! - **`order_routes`** - protected order endpoints

/// Main router creation
pub mod router;

/// Authentication route handlers
pub mod auth_routes;

/// Order route handlers
pub mod order_routes;

// Re-export commonly used functions
pub use router::create_router;
