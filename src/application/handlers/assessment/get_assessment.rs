//! Get assessment query handler.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Query for a single assessment by id.
#[derive(Debug, Clone, Copy)]
pub struct GetAssessment {
    pub id: AssessmentId,
}

/// Handles single-record lookup, scoped to the calling user.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Returns the record if it exists and belongs to the user.
    ///
    /// # Errors
    ///
    /// - `NotFound` for unknown ids and for records owned by someone
    ///   else; existence of foreign records is never revealed
    pub async fn handle(
        &self,
        user_id: &UserId,
        query: GetAssessment,
    ) -> Result<Assessment, AssessmentError> {
        self.repository.get(user_id, &query.id).await
    }
}
