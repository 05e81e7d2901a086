//! List assessments query handler.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

/// Query for the caller's full assessment history.
#[derive(Debug, Clone, Default)]
pub struct ListAssessments;

/// Handles history listing, newest first.
pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Returns every assessment owned by the user, newest first. A user
    /// with no history gets an empty list.
    pub async fn handle(
        &self,
        user_id: &UserId,
        _query: ListAssessments,
    ) -> Result<Vec<Assessment>, AssessmentError> {
        self.repository.list(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryAssessmentStore;
    use crate::domain::assessment::NewAssessment;
    use crate::domain::catalog::{reference_catalog, Level};
    use crate::domain::scoring::{compute_scores, AnswerSet};

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn draft(name: &str) -> NewAssessment {
        let answers: AnswerSet = reference_catalog()
            .questions()
            .iter()
            .map(|q| (q.id.clone(), Level::Managed))
            .collect();
        let scores = compute_scores(&answers, reference_catalog());
        NewAssessment::new(name, answers, scores)
    }

    #[tokio::test]
    async fn lists_only_the_callers_records_newest_first() {
        let store = Arc::new(InMemoryAssessmentStore::new(reference_catalog()));
        store.create(&user("alice"), draft("Older")).await.unwrap();
        store.create(&user("alice"), draft("Newer")).await.unwrap();
        store.create(&user("bob"), draft("Elsewhere")).await.unwrap();

        let handler = ListAssessmentsHandler::new(store);
        let listed = handler.handle(&user("alice"), ListAssessments).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name(), "Newer");
        assert_eq!(listed[1].name(), "Older");
    }

    #[tokio::test]
    async fn empty_history_is_an_empty_list() {
        let store = Arc::new(InMemoryAssessmentStore::new(reference_catalog()));
        let handler = ListAssessmentsHandler::new(store);

        let listed = handler.handle(&user("fresh"), ListAssessments).await.unwrap();
        assert!(listed.is_empty());
    }
}
