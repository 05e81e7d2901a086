//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use crate::domain::catalog::Catalog;

use super::handlers::get_catalog;

/// Creates the catalog router.
pub fn catalog_routes(catalog: &'static Catalog) -> Router {
    Router::new().route("/", get(get_catalog)).with_state(catalog)
}
