//! Raw questionnaire answers keyed by question identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{Catalog, Level};
use crate::domain::foundation::QuestionId;

/// A mapping from question identifier to a raw maturity level.
///
/// Held transiently during questionnaire completion and stored verbatim
/// on the persisted record for audit and recompute. Completeness against
/// the catalog is checked at submission, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, Level>);

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous one for the question.
    pub fn insert(&mut self, id: QuestionId, level: Level) {
        self.0.insert(id, level);
    }

    /// Returns the recorded level for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<Level> {
        self.0.get(id).copied()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Level)> {
        self.0.iter().map(|(id, level)| (id, *level))
    }

    /// Catalog questions with no recorded answer, in catalog order.
    pub fn missing_from(&self, catalog: &Catalog) -> Vec<QuestionId> {
        catalog
            .questions()
            .iter()
            .filter(|q| !self.0.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// True when every catalog question has an answer.
    pub fn is_complete_for(&self, catalog: &Catalog) -> bool {
        self.missing_from(catalog).is_empty()
    }
}

impl FromIterator<(QuestionId, Level)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Level)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::reference_catalog;

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let mut answers = AnswerSet::new();
        answers.insert(qid("MEA01.01"), Level::Established);

        assert_eq!(answers.get(&qid("MEA01.01")), Some(Level::Established));
        assert_eq!(answers.get(&qid("MEA01.02")), None);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn insert_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        answers.insert(qid("MEA01.01"), Level::Performed);
        answers.insert(qid("MEA01.01"), Level::Optimizing);

        assert_eq!(answers.get(&qid("MEA01.01")), Some(Level::Optimizing));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn missing_from_lists_unanswered_catalog_questions() {
        let catalog = reference_catalog();
        let mut answers = AnswerSet::new();
        for question in catalog.questions().iter().skip(2) {
            answers.insert(question.id.clone(), Level::Managed);
        }

        let missing = answers.missing_from(catalog);
        assert_eq!(missing, vec![qid("MEA01.01"), qid("MEA01.02")]);
        assert!(!answers.is_complete_for(catalog));
    }

    #[test]
    fn complete_answer_set_has_no_missing_questions() {
        let catalog = reference_catalog();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id.clone(), Level::Predictable))
            .collect();

        assert!(answers.is_complete_for(catalog));
        assert!(answers.missing_from(catalog).is_empty());
    }

    #[test]
    fn serializes_as_flat_map_of_numbers() {
        let mut answers = AnswerSet::new();
        answers.insert(qid("MEA01.01"), Level::Established);
        answers.insert(qid("MEA03.04"), Level::Performed);

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"MEA01.01":3,"MEA03.04":1}"#);
    }

    #[test]
    fn deserialization_rejects_out_of_range_levels() {
        let result = serde_json::from_str::<AnswerSet>(r#"{"MEA01.01":6}"#);
        assert!(result.is_err());
    }
}
