//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `api_router` assembles them behind the identity middleware; `/health`
//! stays outside it so probes never touch the identity provider.

pub mod assessment;
pub mod catalog;
pub mod middleware;

// Re-export key types for convenience
pub use assessment::{assessment_routes, AssessmentHandlers};
pub use catalog::catalog_routes;
pub use middleware::{identity_middleware, IdentityState, RequireAuth};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::domain::catalog::reference_catalog;

/// State for the health endpoint.
#[derive(Debug, Clone)]
struct HealthState {
    namespace: String,
}

/// GET /health - Liveness probe
async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "namespace": state.namespace,
        })),
    )
}

/// Assembles the full API router.
///
/// All `/api` routes pass through the identity middleware, so every
/// handler sees a resolved user - anonymous callers included.
pub fn api_router(
    handlers: AssessmentHandlers,
    identity: IdentityState,
    namespace: impl Into<String>,
) -> Router {
    let api = Router::new()
        .nest("/api/assessments", assessment_routes(handlers))
        .nest("/api/catalog", catalog_routes(reference_catalog()))
        .layer(axum::middleware::from_fn_with_state(
            identity,
            identity_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .with_state(HealthState {
            namespace: namespace.into(),
        })
        .merge(api)
        .layer(TraceLayer::new_for_http())
}
