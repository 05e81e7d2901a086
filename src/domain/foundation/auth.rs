//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user as handed over by the
//! identity collaborator. They have no provider dependencies - any
//! identity backend can populate them via the `IdentityProvider` port.
//! Anonymous users are first-class: a caller without a token still gets
//! a stable opaque identifier, mirroring anonymous sign-in.

use super::UserId;
use thiserror::Error;

/// Authenticated user resolved by the identity collaborator.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The stable opaque identifier used to scope all repository access.
    pub id: UserId,

    /// Display name if the identity backend supplied one.
    pub display_name: Option<String>,

    /// Whether this identity was issued without credentials.
    pub anonymous: bool,
}

impl AuthenticatedUser {
    /// Creates a user resolved from credentials.
    pub fn new(id: UserId, display_name: Option<String>) -> Self {
        Self {
            id,
            display_name,
            anonymous: false,
        }
    }

    /// Creates an anonymous user with a stable opaque identifier.
    pub fn anonymous(id: UserId) -> Self {
        Self {
            id,
            display_name: None,
            anonymous: true,
        }
    }

    /// Returns the display name, falling back to the user id.
    pub fn display_name_or_id(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Errors that can occur while resolving an identity.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The supplied token is unknown, malformed, or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The identity backend is unreachable (network, config, etc.).
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
