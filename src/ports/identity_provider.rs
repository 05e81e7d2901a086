//! Identity provider port.
//!
//! The core treats identity purely as a scoping key: once the external
//! handshake completes, all it needs is a stable opaque `UserId`.
//! Implementations decide what a token means; the port stays
//! provider-agnostic.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Resolves an optional credential to an authenticated user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the caller.
    ///
    /// With no token, implementations issue an anonymous identity with
    /// a stable opaque id rather than failing, mirroring anonymous
    /// sign-in.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` when a supplied token is unknown or expired
    /// - `ServiceUnavailable` when the identity backend is unreachable
    async fn resolve(&self, token: Option<&str>) -> Result<AuthenticatedUser, AuthError>;
}
