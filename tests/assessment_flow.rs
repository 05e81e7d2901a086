//! Integration tests for the assessment flow.
//!
//! These tests exercise the full path from submission through the
//! repository port to listing, lookup, reporting, and live updates,
//! using the in-memory store behind the same handlers the HTTP layer
//! uses.

use std::sync::Arc;

use mea_maturity::adapters::store::InMemoryAssessmentStore;
use mea_maturity::application::handlers::assessment::{
    GetAssessment, GetAssessmentHandler, GetReport, GetReportHandler, ListAssessments,
    ListAssessmentsHandler, SubmitAssessment, SubmitAssessmentHandler, WatchAssessments,
    WatchAssessmentsHandler,
};
use mea_maturity::domain::assessment::AssessmentError;
use mea_maturity::domain::catalog::{reference_catalog, Level};
use mea_maturity::domain::foundation::UserId;
use mea_maturity::domain::scoring::AnswerSet;
use mea_maturity::ports::AssessmentRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    store: Arc<InMemoryAssessmentStore>,
    submit: SubmitAssessmentHandler,
    list: ListAssessmentsHandler,
    get: GetAssessmentHandler,
    report: GetReportHandler,
    watch: WatchAssessmentsHandler,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(InMemoryAssessmentStore::new(reference_catalog()));
        let repo: Arc<dyn AssessmentRepository> = store.clone();
        Self {
            store,
            submit: SubmitAssessmentHandler::new(repo.clone(), reference_catalog()),
            list: ListAssessmentsHandler::new(repo.clone()),
            get: GetAssessmentHandler::new(repo.clone()),
            report: GetReportHandler::new(repo.clone()),
            watch: WatchAssessmentsHandler::new(repo),
        }
    }
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn uniform_answers(level: Level) -> AnswerSet {
    reference_catalog()
        .questions()
        .iter()
        .map(|q| (q.id.clone(), level))
        .collect()
}

fn submission(name: &str, level: Level) -> SubmitAssessment {
    SubmitAssessment {
        name: name.to_string(),
        answers: uniform_answers(level),
    }
}

// =============================================================================
// Submission and listing
// =============================================================================

#[tokio::test]
async fn submitted_assessment_appears_exactly_once_at_head_of_list() {
    let app = TestApp::new();
    let alice = user("alice");

    app.submit
        .handle(&alice, submission("First run", Level::Managed))
        .await
        .unwrap();
    let second = app
        .submit
        .handle(&alice, submission("Second run", Level::Established))
        .await
        .unwrap();

    let listed = app.list.handle(&alice, ListAssessments).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id(), second.id());
    assert_eq!(
        listed
            .iter()
            .filter(|record| record.id() == second.id())
            .count(),
        1
    );
}

#[tokio::test]
async fn fresh_user_sees_an_empty_history() {
    let app = TestApp::new();
    let listed = app.list.handle(&user("newcomer"), ListAssessments).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn history_stays_strictly_newest_first_across_rapid_submissions() {
    let app = TestApp::new();
    let alice = user("alice");

    for index in 0..8 {
        app.submit
            .handle(&alice, submission(&format!("Run {index}"), Level::Performed))
            .await
            .unwrap();
    }

    let listed = app.list.handle(&alice, ListAssessments).await.unwrap();
    assert_eq!(listed.len(), 8);
    for window in listed.windows(2) {
        assert!(window[0].created_at() > window[1].created_at());
    }
    assert_eq!(listed[0].name(), "Run 7");
}

#[tokio::test]
async fn incomplete_submission_is_rejected_and_history_is_unchanged() {
    let app = TestApp::new();
    let alice = user("alice");

    let mut answers = uniform_answers(Level::Managed);
    let partial: AnswerSet = answers
        .iter()
        .take(10)
        .map(|(id, level)| (id.clone(), level))
        .collect();
    answers = partial;

    let result = app
        .submit
        .handle(
            &alice,
            SubmitAssessment {
                name: "Partial".to_string(),
                answers,
            },
        )
        .await;

    assert!(matches!(result, Err(AssessmentError::Incomplete { .. })));
    assert_eq!(app.store.record_count(), 0);
    let listed = app.list.handle(&alice, ListAssessments).await.unwrap();
    assert!(listed.is_empty());
}

// =============================================================================
// Ownership scoping
// =============================================================================

#[tokio::test]
async fn users_never_see_each_others_records() {
    let app = TestApp::new();
    let alice = user("alice");
    let bob = user("bob");

    let record = app
        .submit
        .handle(&alice, submission("Alice's audit", Level::Managed))
        .await
        .unwrap();

    let bob_list = app.list.handle(&bob, ListAssessments).await.unwrap();
    assert!(bob_list.is_empty());

    let bob_get = app.get.handle(&bob, GetAssessment { id: record.id() }).await;
    assert_eq!(bob_get, Err(AssessmentError::NotFound(record.id())));

    let bob_report = app.report.handle(&bob, GetReport { id: record.id() }).await;
    assert!(matches!(bob_report, Err(AssessmentError::NotFound(_))));
}

// =============================================================================
// Scoring and reporting
// =============================================================================

#[tokio::test]
async fn stored_scores_drive_the_report() {
    let app = TestApp::new();
    let alice = user("alice");

    let record = app
        .submit
        .handle(&alice, submission("Steady state", Level::Predictable))
        .await
        .unwrap();
    assert!((record.overall() - 4.0).abs() < 1e-12);

    let view = app
        .report
        .handle(&alice, GetReport { id: record.id() })
        .await
        .unwrap();

    assert_eq!(view.report.maturity.title, "Predictable");
    assert_eq!(view.report.chart_series.len(), 3);
    for point in &view.report.chart_series {
        assert!((point.value - 4.0).abs() < 1e-12);
        assert_eq!(point.max, 5.0);
    }
    for recommendation in &view.report.recommendations {
        assert!(recommendation.advisory.contains("Optimization"));
    }
}

#[tokio::test]
async fn mixed_answers_produce_count_weighted_overall() {
    let app = TestApp::new();
    let alice = user("alice");

    // MEA01 all 5s, everything else 0: overall is 25/17, not a mean of
    // domain averages.
    let answers: AnswerSet = reference_catalog()
        .questions()
        .iter()
        .map(|q| {
            let level = if q.id.as_str().starts_with("MEA01") {
                Level::Optimizing
            } else {
                Level::Incomplete
            };
            (q.id.clone(), level)
        })
        .collect();

    let record = app
        .submit
        .handle(
            &alice,
            SubmitAssessment {
                name: "Lopsided".to_string(),
                answers,
            },
        )
        .await
        .unwrap();

    assert!((record.overall() - 25.0 / 17.0).abs() < 1e-12);
}

// =============================================================================
// Live updates
// =============================================================================

#[tokio::test]
async fn watch_pushes_each_submission_to_the_observer() {
    let app = TestApp::new();
    let alice = user("alice");

    let mut watch = app
        .watch
        .handle(&alice, WatchAssessments)
        .await
        .unwrap();
    assert!(watch.snapshot().is_empty());

    let first = app
        .submit
        .handle(&alice, submission("First", Level::Managed))
        .await
        .unwrap();

    assert!(watch.changed().await);
    let snapshot = watch.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id(), first.id());

    let second = app
        .submit
        .handle(&alice, submission("Second", Level::Managed))
        .await
        .unwrap();

    assert!(watch.changed().await);
    let snapshot = watch.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id(), second.id());
}

#[tokio::test]
async fn watch_ignores_other_users_submissions() {
    let app = TestApp::new();

    let mut watch = app
        .watch
        .handle(&user("observer"), WatchAssessments)
        .await
        .unwrap();

    app.submit
        .handle(&user("someone-else"), submission("Elsewhere", Level::Managed))
        .await
        .unwrap();

    let raced = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        watch.changed(),
    )
    .await;
    assert!(raced.is_err(), "observer must not be woken by foreign writes");
}
