//! HTTP handlers for catalog endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::domain::catalog::Catalog;

use super::dto::CatalogResponse;

/// GET /api/catalog - The reference question catalog and maturity scale
///
/// Reference data is fixed at build time; clients may cache freely.
pub async fn get_catalog(State(catalog): State<&'static Catalog>) -> impl IntoResponse {
    (StatusCode::OK, Json(CatalogResponse::from_catalog(catalog)))
}
