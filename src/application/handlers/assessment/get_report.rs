//! Get report query handler.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::domain::report::{build_report, Report};
use crate::ports::AssessmentRepository;

/// Query for the rendered report of a single assessment.
#[derive(Debug, Clone, Copy)]
pub struct GetReport {
    pub id: AssessmentId,
}

/// A stored assessment together with its derived report.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentReport {
    pub assessment: Assessment,
    pub report: Report,
}

/// Handles report assembly for a stored assessment.
///
/// The report is derived from the stored score card on every read; the
/// same record always yields the same report.
pub struct GetReportHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `NotFound` for unknown ids and for records owned by someone else
    pub async fn handle(
        &self,
        user_id: &UserId,
        query: GetReport,
    ) -> Result<AssessmentReport, AssessmentError> {
        let assessment = self.repository.get(user_id, &query.id).await?;
        let report = build_report(&assessment);
        Ok(AssessmentReport { assessment, report })
    }
}
