//! The persisted assessment record.

use serde::{Deserialize, Serialize};

use super::AssessmentError;
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
use crate::domain::scoring::{AnswerSet, ScoreCard};

/// A submission payload not yet accepted by the repository.
///
/// The repository assigns the id and creation timestamp on create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub name: String,
    pub answers: AnswerSet,
    pub scores: ScoreCard,
}

impl NewAssessment {
    pub fn new(name: impl Into<String>, answers: AnswerSet, scores: ScoreCard) -> Self {
        Self {
            name: name.into(),
            answers,
            scores,
        }
    }
}

/// One completed, persisted questionnaire submission with computed scores.
///
/// Immutable after creation: no update or delete surface exists.
/// Documents with fields outside this set are rejected at the
/// deserialization boundary rather than passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    name: String,
    answers: AnswerSet,
    scores: ScoreCard,
    created_at: Timestamp,
}

impl Assessment {
    /// Assembles a record from repository-assigned metadata and a
    /// validated submission. Rejects empty or whitespace-only names.
    pub fn new(
        id: AssessmentId,
        user_id: UserId,
        draft: NewAssessment,
        created_at: Timestamp,
    ) -> Result<Self, AssessmentError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AssessmentError::validation("name", "cannot be empty"));
        }

        Ok(Self {
            id,
            user_id,
            name: name.to_string(),
            answers: draft.answers,
            scores: draft.scores,
            created_at,
        })
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw answers, kept for audit and recompute.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn scores(&self) -> &ScoreCard {
        &self.scores
    }

    /// Overall average score across the entire catalog.
    pub fn overall(&self) -> f64 {
        self.scores.overall
    }

    /// Repository-assigned creation time; the sole sort key for listings.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// True if the given user owns this record.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
