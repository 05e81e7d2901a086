//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_assessment, get_report, list_assessments, submit_assessment, watch_assessments,
    AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/", get(list_assessments))
        .route("/watch", get(watch_assessments))
        .route("/:id", get(get_assessment))
        .route("/:id/report", get(get_report))
        .with_state(handlers)
}
