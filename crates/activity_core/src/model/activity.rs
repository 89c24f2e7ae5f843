//! Activity domain model.
//!
//! # Responsibility
//! - Define the timestamped text record stored by `ActivityStore`.
//! - Separate insert input (`NewActivity`) from stored records (`Activity`).
//!
//! # Invariants
//! - `id` is unique per store and immutable after insertion.
//! - `description` is unconstrained text and may be empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned identifier (SQLite rowid alias).
pub type ActivityId = u64;

/// A stored activity record.
///
/// Field names are the external JSON names (`time`, `description`, `id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time: DateTime<Utc>,
    pub description: String,
    pub id: ActivityId,
}

/// Insert input: an activity that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub time: DateTime<Utc>,
    pub description: String,
}

impl NewActivity {
    pub fn new(time: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            time,
            description: description.into(),
        }
    }

    /// Creates an activity stamped with the current UTC time.
    pub fn now(description: impl Into<String>) -> Self {
        Self::new(Utc::now(), description)
    }

    /// Attaches the storage-assigned id, producing the stored record shape.
    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            time: self.time,
            description: self.description,
            id,
        }
    }
}
