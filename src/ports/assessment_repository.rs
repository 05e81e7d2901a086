//! Assessment repository port.
//!
//! Defines the persistence contract for assessment records. The backing
//! document store is an external collaborator; implementations adapt it
//! to these operations and nothing else - no store-specific query
//! language leaks through.
//!
//! # Contract
//!
//! - **Append-only**: records are created once and never updated or
//!   deleted through this port.
//! - **User-scoped**: every operation is bound to the owning user.
//! - **Ordering**: listings are strictly descending by the
//!   repository-assigned creation timestamp, ties broken by id.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::assessment::{Assessment, AssessmentError, NewAssessment};
use crate::domain::foundation::{AssessmentId, UserId};

/// Live, push-based view of one user's assessment list.
///
/// Each delivery replaces the whole list atomically, already re-sorted;
/// observers never see a partial update. Dropping the handle
/// unsubscribes and releases the underlying channel resources on every
/// exit path, including errors.
#[derive(Debug, Clone)]
pub struct AssessmentWatch {
    rx: watch::Receiver<Vec<Assessment>>,
}

impl AssessmentWatch {
    /// Wraps a watch receiver produced by a repository adapter.
    pub fn new(rx: watch::Receiver<Vec<Assessment>>) -> Self {
        Self { rx }
    }

    /// Returns the latest snapshot and marks it as seen.
    pub fn snapshot(&mut self) -> Vec<Assessment> {
        self.rx.borrow_and_update().clone()
    }

    /// Waits until a new snapshot is available.
    ///
    /// Returns `false` when the repository side has gone away; callers
    /// should stop observing at that point.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// Repository port for assessment persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Durably stores a new assessment for the user, assigning a unique
    /// id and a server-generated timestamp that increases monotonically
    /// within this repository.
    ///
    /// Re-validates the draft defensively even though the submission
    /// flow validates first: an empty name or an answer set that does
    /// not cover the catalog is rejected and nothing is persisted.
    ///
    /// Duplicate calls produce duplicate records; callers must block
    /// re-submission while a create is outstanding.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` / `Incomplete` on an invalid draft
    /// - `Store` when the write cannot be durably committed (retryable)
    async fn create(
        &self,
        user_id: &UserId,
        draft: NewAssessment,
    ) -> Result<AssessmentId, AssessmentError>;

    /// Returns every assessment owned by the user, newest first.
    ///
    /// A user with no records gets an empty vec, never an error.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, AssessmentError>;

    /// Returns one assessment by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` for unknown ids and for ids owned by another user
    async fn get(
        &self,
        user_id: &UserId,
        id: &AssessmentId,
    ) -> Result<Assessment, AssessmentError>;

    /// Opens a live view of the user's assessment list.
    ///
    /// The initial snapshot is delivered immediately; every subsequent
    /// create by the same user is pushed without polling.
    async fn watch(&self, user_id: &UserId) -> Result<AssessmentWatch, AssessmentError>;
}
