//! Error type for assessment operations.

use thiserror::Error;

use crate::domain::foundation::{AssessmentId, QuestionId};

/// Errors surfaced by the assessment flow and repository.
///
/// None of these are fatal; all are recoverable at the caller's
/// boundary. No variant triggers an automatic retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssessmentError {
    /// A submitted field failed validation (e.g. empty name).
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// The answer set does not cover every catalog question.
    #[error("Answer set is incomplete: {} question(s) unanswered", missing.len())]
    Incomplete { missing: Vec<QuestionId> },

    /// No record with this id exists for the current user.
    ///
    /// Records owned by other users are reported as not found rather
    /// than leaking their existence.
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    /// The backing store could not durably commit or serve the request.
    /// Retryable by the caller; the repository performs no retries.
    #[error("Persistence failure: {0}")]
    Store(String),
}

impl AssessmentError {
    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an incomplete-answer-set error.
    pub fn incomplete(missing: Vec<QuestionId>) -> Self {
        AssessmentError::Incomplete { missing }
    }

    /// Creates a persistence error.
    pub fn store(message: impl Into<String>) -> Self {
        AssessmentError::Store(message.into())
    }

    /// True if the caller may retry the operation as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AssessmentError::Store(_))
    }
}
