//! The persisted assessment record and its errors.

mod errors;
mod record;

pub use errors::AssessmentError;
pub use record::{Assessment, NewAssessment};
