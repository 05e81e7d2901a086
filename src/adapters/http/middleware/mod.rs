//! HTTP middleware.

mod auth;

pub use auth::{identity_middleware, AuthRejection, IdentityState, RequireAuth};
