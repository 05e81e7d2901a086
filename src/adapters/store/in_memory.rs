//! In-memory assessment repository.
//!
//! Reference implementation of the `AssessmentRepository` port: a
//! per-user collection of records with repository-assigned monotonic
//! timestamps and push-based live views over `tokio::sync::watch`.
//! Serves as the store for local runs and as the deterministic backend
//! for tests; a hosted document store would slot in behind the same
//! port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use tokio::sync::watch;

use crate::domain::assessment::{Assessment, AssessmentError, NewAssessment};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
use crate::ports::{AssessmentRepository, AssessmentWatch};

/// One user's records plus the live feed that mirrors them.
struct UserShelf {
    /// Kept sorted newest-first at all times.
    records: Vec<Assessment>,
    feed: watch::Sender<Vec<Assessment>>,
}

impl UserShelf {
    fn new() -> Self {
        let (feed, _) = watch::channel(Vec::new());
        Self {
            records: Vec::new(),
            feed,
        }
    }

    /// Inserts a record, re-sorts, and pushes the whole list atomically.
    fn insert(&mut self, record: Assessment) {
        self.records.push(record);
        self.records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        // send_replace delivers even with no receivers attached yet.
        self.feed.send_replace(self.records.clone());
    }
}

/// In-memory implementation of the assessment repository.
pub struct InMemoryAssessmentStore {
    catalog: &'static Catalog,
    shelves: RwLock<HashMap<UserId, UserShelf>>,
    /// Last issued creation timestamp; never reused.
    clock: Mutex<Option<Timestamp>>,
    fail_writes: bool,
}

impl InMemoryAssessmentStore {
    /// Creates an empty store validating against the given catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            shelves: RwLock::new(HashMap::new()),
            clock: Mutex::new(None),
            fail_writes: false,
        }
    }

    /// Creates a store whose writes fail with a persistence error, for
    /// exercising the retryable-failure path in tests.
    pub fn failing(catalog: &'static Catalog) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(catalog)
        }
    }

    /// Total record count across all users (for test assertions).
    pub fn record_count(&self) -> usize {
        self.shelves
            .read()
            .expect("InMemoryAssessmentStore: shelves lock poisoned")
            .values()
            .map(|shelf| shelf.records.len())
            .sum()
    }

    /// Issues a timestamp strictly greater than any issued before.
    ///
    /// Wall-clock reads can tie at millisecond granularity; ties are
    /// bumped forward so the creation timestamp stays a total order.
    fn next_timestamp(&self) -> Timestamp {
        let mut clock = self
            .clock
            .lock()
            .expect("InMemoryAssessmentStore: clock lock poisoned");
        let mut now = Timestamp::now();
        if let Some(last) = *clock {
            if now <= last {
                now = last.plus_millis(1);
            }
        }
        *clock = Some(now);
        now
    }

    fn validate(&self, draft: &NewAssessment) -> Result<(), AssessmentError> {
        if draft.name.trim().is_empty() {
            return Err(AssessmentError::validation("name", "cannot be empty"));
        }
        let missing = draft.answers.missing_from(self.catalog);
        if !missing.is_empty() {
            return Err(AssessmentError::incomplete(missing));
        }
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentStore {
    async fn create(
        &self,
        user_id: &UserId,
        draft: NewAssessment,
    ) -> Result<AssessmentId, AssessmentError> {
        self.validate(&draft)?;

        if self.fail_writes {
            return Err(AssessmentError::store("simulated write failure"));
        }

        let id = AssessmentId::new();
        let created_at = self.next_timestamp();
        let record = Assessment::new(id, user_id.clone(), draft, created_at)?;

        let mut shelves = self
            .shelves
            .write()
            .expect("InMemoryAssessmentStore: shelves lock poisoned");
        shelves
            .entry(user_id.clone())
            .or_insert_with(UserShelf::new)
            .insert(record);

        tracing::debug!(user = %user_id, assessment = %id, "assessment stored");
        Ok(id)
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, AssessmentError> {
        let shelves = self
            .shelves
            .read()
            .expect("InMemoryAssessmentStore: shelves lock poisoned");
        Ok(shelves
            .get(user_id)
            .map(|shelf| shelf.records.clone())
            .unwrap_or_default())
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: &AssessmentId,
    ) -> Result<Assessment, AssessmentError> {
        let shelves = self
            .shelves
            .read()
            .expect("InMemoryAssessmentStore: shelves lock poisoned");
        shelves
            .get(user_id)
            .and_then(|shelf| shelf.records.iter().find(|record| record.id() == *id))
            .cloned()
            .ok_or(AssessmentError::NotFound(*id))
    }

    async fn watch(&self, user_id: &UserId) -> Result<AssessmentWatch, AssessmentError> {
        let mut shelves = self
            .shelves
            .write()
            .expect("InMemoryAssessmentStore: shelves lock poisoned");
        let shelf = shelves.entry(user_id.clone()).or_insert_with(UserShelf::new);
        // Seed the channel so the first snapshot is current even if no
        // create happened since the shelf was built.
        shelf.feed.send_replace(shelf.records.clone());
        Ok(AssessmentWatch::new(shelf.feed.subscribe()))
    }
}
