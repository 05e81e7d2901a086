//! Static token identity provider.
//!
//! Resolves bearer tokens against a fixed in-process table and issues a
//! stable anonymous identity when no token is supplied. Stands in for a
//! hosted identity service in local runs and tests; the token handshake
//! with a real provider would live behind the same port.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// Identity provider backed by a static token table.
///
/// Every untokened caller resolves to the same anonymous identity for
/// the lifetime of this instance, so their records stay reachable
/// across requests served by the same process.
pub struct StaticTokenIdentity {
    tokens: HashMap<String, (UserId, Option<String>)>,
    anonymous_id: UserId,
    unavailable: bool,
}

impl StaticTokenIdentity {
    /// Creates a provider with an empty token table.
    ///
    /// The anonymous id is minted once per instance.
    pub fn new() -> Self {
        let anonymous_id = UserId::new(format!("anon-{}", Uuid::new_v4()))
            .unwrap_or_else(|_| unreachable!("generated anonymous id is never empty"));
        Self {
            tokens: HashMap::new(),
            anonymous_id,
            unavailable: false,
        }
    }

    /// Registers a token resolving to the given user.
    pub fn with_token(
        mut self,
        token: impl Into<String>,
        user_id: UserId,
        display_name: Option<String>,
    ) -> Self {
        self.tokens.insert(token.into(), (user_id, display_name));
        self
    }

    /// Creates a provider that reports the backend as unreachable, for
    /// exercising the transient-failure path in tests.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }
}

impl Default for StaticTokenIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentity {
    async fn resolve(&self, token: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
        if self.unavailable {
            return Err(AuthError::service_unavailable("identity backend offline"));
        }

        match token {
            None => Ok(AuthenticatedUser::anonymous(self.anonymous_id.clone())),
            Some(token) => self
                .tokens
                .get(token)
                .map(|(id, name)| AuthenticatedUser::new(id.clone(), name.clone()))
                .ok_or(AuthError::InvalidToken),
        }
    }
}
