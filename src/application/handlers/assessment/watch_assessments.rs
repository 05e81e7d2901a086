//! Watch assessments query handler.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::UserId;
use crate::ports::{AssessmentRepository, AssessmentWatch};

/// Query opening a live view of the caller's assessment list.
#[derive(Debug, Clone, Default)]
pub struct WatchAssessments;

/// Handles live subscription to a user's assessment history.
///
/// The returned handle delivers the current list immediately and every
/// later create as a whole-list replacement; dropping it unsubscribes.
pub struct WatchAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl WatchAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        user_id: &UserId,
        _query: WatchAssessments,
    ) -> Result<AssessmentWatch, AssessmentError> {
        self.repository.watch(user_id).await
    }
}
