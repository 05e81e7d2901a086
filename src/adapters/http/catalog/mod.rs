//! HTTP adapter for catalog endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
