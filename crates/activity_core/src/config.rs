//! Store configuration.
//!
//! # Responsibility
//! - Carry the database location and connection tuning into `ActivityStore::open`.
//!
//! # Invariants
//! - No global state: every store is opened from an explicit `StoreConfig`.

use std::path::PathBuf;
use std::time::Duration;

/// File name used when the caller does not pick one.
pub const DEFAULT_DB_FILE_NAME: &str = "activities.db";

/// How long SQLite waits on a locked database before failing a statement.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the SQLite database file. Created on first open.
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_BUSY_TIMEOUT, DEFAULT_DB_FILE_NAME};
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn default_points_at_default_file_name() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, Path::new(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }

    #[test]
    fn with_busy_timeout_keeps_path() {
        let config = StoreConfig::new("/tmp/work.db").with_busy_timeout(Duration::from_millis(250));
        assert_eq!(config.db_path, Path::new("/tmp/work.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }
}
