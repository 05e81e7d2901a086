//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `store` - Assessment repository implementations
//! - `identity` - Identity provider implementations
//! - `http` - HTTP API surface (axum)

pub mod http;
pub mod identity;
pub mod store;
