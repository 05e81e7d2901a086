//! A single checklist item within a process domain.

use serde::Serialize;

use super::ProcessDomain;
use crate::domain::foundation::QuestionId;

/// An immutable catalog entry: one sub-practice scored 0-5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable identifier, e.g. "MEA02.03".
    pub id: QuestionId,
    /// The domain this question belongs to.
    pub domain: ProcessDomain,
    /// The questionnaire prompt shown to the user.
    pub prompt: String,
    /// Reference-framework citation for the underlying practice.
    pub citation: String,
}

impl Question {
    pub fn new(
        id: QuestionId,
        domain: ProcessDomain,
        prompt: impl Into<String>,
        citation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            domain,
            prompt: prompt.into(),
            citation: citation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_holds_catalog_fields() {
        let question = Question::new(
            QuestionId::new("MEA01.01").unwrap(),
            ProcessDomain::Mea01,
            "Has a monitoring approach been established?",
            "MEA01.01 Establish a monitoring approach.",
        );

        assert_eq!(question.id.as_str(), "MEA01.01");
        assert_eq!(question.domain, ProcessDomain::Mea01);
        assert!(question.citation.starts_with("MEA01.01"));
    }
}
