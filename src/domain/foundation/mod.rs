//! Shared domain primitives.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::ValidationError;
pub use ids::{AssessmentId, QuestionId, UserId};
pub use timestamp::Timestamp;
