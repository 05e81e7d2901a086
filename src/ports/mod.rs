//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Persistence contract for assessment records
//! - `AssessmentWatch` - Live handle onto a user's assessment list
//! - `IdentityProvider` - Resolves callers to stable opaque user ids

mod assessment_repository;
mod identity_provider;

pub use assessment_repository::{AssessmentRepository, AssessmentWatch};
pub use identity_provider::IdentityProvider;
