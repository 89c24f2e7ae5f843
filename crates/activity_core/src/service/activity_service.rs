//! Activity use-case service.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::store::{ActivityRepository, StoreResult};
use chrono::{DateTime, Utc};

/// Use-case wrapper around an `ActivityRepository`.
pub struct ActivityService<R: ActivityRepository> {
    repo: R,
}

impl<R: ActivityRepository> ActivityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records an activity that happens now (current UTC time).
    pub fn record(&self, description: impl Into<String>) -> StoreResult<ActivityId> {
        self.repo.insert_activity(&NewActivity::now(description))
    }

    /// Records an activity at an explicit point in time.
    pub fn record_at(
        &self,
        time: DateTime<Utc>,
        description: impl Into<String>,
    ) -> StoreResult<ActivityId> {
        self.repo.insert_activity(&NewActivity::new(time, description))
    }

    /// Returns `StoreError::NotFound` unchanged when the id is unknown.
    pub fn get(&self, id: ActivityId) -> StoreResult<Activity> {
        self.repo.retrieve_activity(id)
    }

    pub fn list(&self) -> StoreResult<Vec<Activity>> {
        self.repo.list_activities()
    }

    /// Gives the repository back, e.g. to close the store.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
