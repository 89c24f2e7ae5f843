//! Activity persistence contracts and the SQLite-backed store.
//!
//! # Responsibility
//! - Define the data-access contract (`ActivityRepository`) used by services.
//! - Classify storage failures by operation (init, write, read, not found).
//!
//! # Invariants
//! - `NotFound` is reported separately from transport-level read failures.
//! - Errors are surfaced as-is; nothing in this layer retries.

use crate::db::DbError;
use crate::model::activity::{Activity, ActivityId, NewActivity};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod activity_store;

pub use activity_store::ActivityStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Opening the file, creating the table, or preparing a statement failed.
    Initialization(DbError),
    Write(rusqlite::Error),
    NotFound(ActivityId),
    Read(rusqlite::Error),
    /// SQLite refused to release the handle.
    Close(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialization(err) => write!(f, "failed to initialize activity store: {err}"),
            Self::Write(err) => write!(f, "failed to write activity: {err}"),
            Self::NotFound(id) => write!(f, "activity not found: {id}"),
            Self::Read(err) => write!(f, "failed to read activities: {err}"),
            Self::Close(err) => write!(f, "failed to close activity store: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Initialization(err) => Some(err),
            Self::Write(err) | Self::Read(err) | Self::Close(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Initialization(value)
    }
}

/// Data-access contract for activity records.
pub trait ActivityRepository {
    /// Appends a record and returns its newly assigned id.
    fn insert_activity(&self, activity: &NewActivity) -> StoreResult<ActivityId>;
    fn retrieve_activity(&self, id: ActivityId) -> StoreResult<Activity>;
    /// Returns every stored record in storage order; no ordering is guaranteed.
    fn list_activities(&self) -> StoreResult<Vec<Activity>>;
}

impl<R: ActivityRepository + ?Sized> ActivityRepository for &R {
    fn insert_activity(&self, activity: &NewActivity) -> StoreResult<ActivityId> {
        (**self).insert_activity(activity)
    }

    fn retrieve_activity(&self, id: ActivityId) -> StoreResult<Activity> {
        (**self).retrieve_activity(id)
    }

    fn list_activities(&self) -> StoreResult<Vec<Activity>> {
        (**self).list_activities()
    }
}
