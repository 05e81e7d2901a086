//! Assessment use-case handlers.

mod get_assessment;
mod get_report;
mod list_assessments;
mod submit_assessment;
mod watch_assessments;

pub use get_assessment::{GetAssessment, GetAssessmentHandler};
pub use get_report::{AssessmentReport, GetReport, GetReportHandler};
pub use list_assessments::{ListAssessments, ListAssessmentsHandler};
pub use submit_assessment::{SubmitAssessment, SubmitAssessmentHandler};
pub use watch_assessments::{WatchAssessments, WatchAssessmentsHandler};
