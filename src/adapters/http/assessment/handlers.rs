//! HTTP handlers for assessment endpoints.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::stream::Stream;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assessment::{
    GetAssessment, GetAssessmentHandler, GetReport, GetReportHandler, ListAssessments,
    ListAssessmentsHandler, SubmitAssessment, SubmitAssessmentHandler, WatchAssessments,
    WatchAssessmentsHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentWatch;

use super::dto::{
    AssessmentListResponse, AssessmentResponse, AssessmentSummaryResponse, ErrorResponse,
    ReportResponse, SubmitAssessmentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    report_handler: Arc<GetReportHandler>,
    watch_handler: Arc<WatchAssessmentsHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
        get_handler: Arc<GetAssessmentHandler>,
        report_handler: Arc<GetReportHandler>,
        watch_handler: Arc<WatchAssessmentsHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            get_handler,
            report_handler,
            watch_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Submit a completed questionnaire
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let answers = match req.typed_answers() {
        Ok(answers) => answers,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(message)),
            )
                .into_response()
        }
    };

    let cmd = SubmitAssessment {
        name: req.name,
        answers,
    };

    match handlers.submit_handler.handle(&user.id, cmd).await {
        Ok(record) => {
            let response: AssessmentResponse = (&record).into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments - List the caller's assessment history
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(&user.id, ListAssessments).await {
        Ok(records) => {
            let response = AssessmentListResponse::from_records(&records);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id - Get one assessment
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(assessment_id): Path<String>,
) -> Response {
    let id = match assessment_id.parse::<AssessmentId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid assessment ID")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(&user.id, GetAssessment { id }).await {
        Ok(record) => {
            let response: AssessmentResponse = (&record).into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id/report - Get the rendered report
pub async fn get_report(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(assessment_id): Path<String>,
) -> Response {
    let id = match assessment_id.parse::<AssessmentId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid assessment ID")),
            )
                .into_response()
        }
    };

    match handlers.report_handler.handle(&user.id, GetReport { id }).await {
        Ok(view) => {
            let response: ReportResponse = (&view).into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/watch - Live assessment list over SSE
///
/// Emits the current list immediately, then one event per create by the
/// same user. Each event carries the whole list, already sorted, so
/// clients replace rather than merge. Closing the connection drops the
/// subscription.
pub async fn watch_assessments(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.watch_handler.handle(&user.id, WatchAssessments).await {
        Ok(watch) => Sse::new(watch_event_stream(watch))
            .keep_alive(KeepAlive::default())
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// Adapts a repository watch handle into an SSE event stream.
fn watch_event_stream(
    watch: AssessmentWatch,
) -> impl Stream<Item = Result<Event, Infallible>> {
    futures::stream::unfold((watch, true), |(mut watch, first)| async move {
        if !first && !watch.changed().await {
            return None;
        }

        let items: Vec<AssessmentSummaryResponse> =
            watch.snapshot().iter().map(Into::into).collect();
        let event = match Event::default().event("assessments").json_data(&items) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!("failed to encode assessment list event: {}", e);
                return None;
            }
        };

        Some((Ok(event), (watch, false)))
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: AssessmentError) -> Response {
    match error {
        AssessmentError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Assessment", &id.to_string())),
        )
            .into_response(),
        AssessmentError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        AssessmentError::Incomplete { missing } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Answer set is incomplete: {} question(s) unanswered",
                missing.len()
            ))),
        )
            .into_response(),
        AssessmentError::Store(msg) => {
            tracing::error!("assessment store failure: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Persistence failure")),
            )
                .into_response()
        }
    }
}
