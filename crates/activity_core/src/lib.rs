//! Embedded SQLite store for timestamped activity records.
//!
//! `ActivityStore` is the single component: it owns the database handle and
//! the prepared insert/retrieve/list statements for its whole lifetime.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{StoreConfig, DEFAULT_BUSY_TIMEOUT, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityId, NewActivity};
pub use service::activity_service::ActivityService;
pub use store::{ActivityRepository, ActivityStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
