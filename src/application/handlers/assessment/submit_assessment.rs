//! Submit assessment command handler.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError, NewAssessment};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::UserId;
use crate::domain::scoring::{compute_scores, AnswerSet};
use crate::ports::AssessmentRepository;

/// Command to submit a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitAssessment {
    /// Free-text label for the run, typically the assessed organisation.
    pub name: String,
    /// One answer per catalog question.
    pub answers: AnswerSet,
}

/// Handles assessment submission: validates the answer set against the
/// catalog, computes scores exactly once, and persists the record.
pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    catalog: &'static Catalog,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, catalog: &'static Catalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Executes the submission for the given user.
    ///
    /// Scores are computed from the answers at submission time and
    /// stored alongside them; reads never recompute.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for an empty name or an answer outside the
    ///   catalog
    /// - `Incomplete` when any catalog question is unanswered; nothing
    ///   is persisted
    /// - `Store` when the repository cannot commit the write
    pub async fn handle(
        &self,
        user_id: &UserId,
        command: SubmitAssessment,
    ) -> Result<Assessment, AssessmentError> {
        if command.name.trim().is_empty() {
            return Err(AssessmentError::validation("name", "cannot be empty"));
        }

        for (question_id, _) in command.answers.iter() {
            if !self.catalog.contains(question_id) {
                return Err(AssessmentError::validation(
                    "answers",
                    format!("unknown question id: {question_id}"),
                ));
            }
        }

        let missing = command.answers.missing_from(self.catalog);
        if !missing.is_empty() {
            tracing::debug!(
                user = %user_id,
                missing = missing.len(),
                "submission rejected: incomplete answer set"
            );
            return Err(AssessmentError::incomplete(missing));
        }

        let scores = compute_scores(&command.answers, self.catalog);
        let draft = NewAssessment::new(command.name, command.answers, scores);
        let id = self.repository.create(user_id, draft).await?;

        tracing::info!(user = %user_id, assessment = %id, "assessment submitted");
        self.repository.get(user_id, &id).await
    }
}
