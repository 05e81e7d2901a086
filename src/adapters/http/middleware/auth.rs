//! Identity middleware and extractors for axum.
//!
//! This module provides:
//! - `identity_middleware` - Layer that resolves the caller via the `IdentityProvider` port
//! - `RequireAuth` - Extractor that reads the resolved user from request extensions
//!
//! # Architecture
//!
//! The middleware uses the `IdentityProvider` port, keeping it
//! provider-agnostic. Callers without a token are resolved to an
//! anonymous identity rather than rejected, so the single-user flow
//! works with zero setup; only an explicitly invalid token is refused.
//!
//! ```text
//! Request → identity_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::IdentityProvider;

/// Identity middleware state - wraps the identity provider.
pub type IdentityState = Arc<dyn IdentityProvider>;

/// Identity middleware that resolves every caller.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header, if any
/// 2. Resolves the caller through the `IdentityProvider` port; a missing
///    token resolves to the provider's anonymous identity
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On an invalid token, returns 401 Unauthorized
/// 5. On an unreachable identity backend, returns 503 Service Unavailable
///
/// # Token Extraction
///
/// Expects the token in the `Authorization` header with `Bearer` prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn identity_middleware(
    State(provider): State<IdentityState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match provider.resolve(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            let (status, message) = match &e {
                AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Identity service unavailable: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Identity service unavailable",
                    )
                }
            };

            (
                status,
                Json(serde_json::json!({
                    "error": message,
                    "code": "AUTH_ERROR"
                })),
            )
                .into_response()
        }
    }
}

/// Extractor that reads the resolved caller.
///
/// Use this extractor in handlers that need the scoping user. If no user
/// is in the request extensions (i.e., the identity middleware did not
/// run), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No resolved identity was present on the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
