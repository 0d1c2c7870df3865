//! Error Module
//!
//! Error types for the API and their conversion to HTTP responses.
//!
//! - **`types`** - `ApiError` / `StoreError` definitions
//! - **`conversion`** - `IntoResponse` impl and request-body glue

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{json_body, unauthorized_challenge};
pub use types::{ApiError, StoreError};
