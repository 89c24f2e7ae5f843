//! SQLite-backed activity store.
//!
//! # Responsibility
//! - Own the database connection and the three prepared statements.
//! - Translate SQLite results into `Activity` records and `StoreError`s.
//!
//! # Invariants
//! - Statements are prepared once in `open*` and reused by every call through
//!   the connection's statement cache; they are released only by `close` or drop.
//! - Log lines carry ids and counts, never descriptions.

use super::{ActivityRepository, StoreError, StoreResult};
use crate::config::StoreConfig;
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::activity::{Activity, ActivityId, NewActivity};
use log::{debug, error, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::time::Instant;

const INSERT_SQL: &str =
    "INSERT INTO activities (id, time, description) VALUES (NULL, ?1, ?2);";
const RETRIEVE_SQL: &str = "SELECT id, time, description FROM activities WHERE id = ?1;";
const LIST_SQL: &str = "SELECT id, time, description FROM activities;";

const PREPARED_STATEMENTS: [&str; 3] = [INSERT_SQL, RETRIEVE_SQL, LIST_SQL];

/// Owner of the activity database handle.
///
/// Dropping the store releases the statements and the connection; `close`
/// does the same but reports a failure to release instead of ignoring it.
#[derive(Debug)]
pub struct ActivityStore {
    conn: Connection,
}

impl ActivityStore {
    /// Opens the configured database file, creating file and table when absent.
    ///
    /// # Errors
    /// - `StoreError::Initialization` when the file cannot be opened, the table
    ///   cannot be created, or a statement fails to prepare.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let conn = open_db(&config.db_path, config.busy_timeout)?;
        Self::with_connection(conn)
    }

    /// Opens a store over a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.set_prepared_statement_cache_capacity(PREPARED_STATEMENTS.len());
        for sql in PREPARED_STATEMENTS {
            if let Err(err) = conn.prepare_cached(sql) {
                error!(
                    "event=store_open module=store status=error error_code=prepare_failed error={err}"
                );
                return Err(StoreError::Initialization(DbError::Sqlite(err)));
            }
        }

        info!(
            "event=store_open module=store status=ok statements={}",
            PREPARED_STATEMENTS.len()
        );
        Ok(Self { conn })
    }

    /// Releases the prepared statements and then the connection.
    ///
    /// Consumes the store, so no call can reach a closed handle.
    pub fn close(self) -> StoreResult<()> {
        self.conn.flush_prepared_statement_cache();
        match self.conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!("event=store_close module=store status=error error={err}");
                Err(StoreError::Close(err))
            }
        }
    }
}

impl ActivityRepository for ActivityStore {
    fn insert_activity(&self, activity: &NewActivity) -> StoreResult<ActivityId> {
        let started_at = Instant::now();
        let mut stmt = self.conn.prepare_cached(INSERT_SQL).map_err(StoreError::Write)?;

        let rowid = stmt
            .insert(params![activity.time, activity.description.as_str()])
            .map_err(|err| {
                error!(
                    "event=activity_insert module=store status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                StoreError::Write(err)
            })?;
        let id = ActivityId::try_from(rowid)
            .map_err(|_| StoreError::Write(rusqlite::Error::IntegralValueOutOfRange(0, rowid)))?;

        debug!(
            "event=activity_insert module=store status=ok id={id} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(id)
    }

    fn retrieve_activity(&self, id: ActivityId) -> StoreResult<Activity> {
        // Rowids are signed; anything above i64::MAX cannot be stored.
        let Ok(key) = i64::try_from(id) else {
            warn!("event=activity_retrieve module=store status=not_found id={id}");
            return Err(StoreError::NotFound(id));
        };

        let mut stmt = self.conn.prepare_cached(RETRIEVE_SQL).map_err(StoreError::Read)?;
        match stmt.query_row([key], activity_from_row).optional() {
            Ok(Some(activity)) => {
                debug!("event=activity_retrieve module=store status=ok id={id}");
                Ok(activity)
            }
            Ok(None) => {
                warn!("event=activity_retrieve module=store status=not_found id={id}");
                Err(StoreError::NotFound(id))
            }
            Err(err) => {
                error!("event=activity_retrieve module=store status=error id={id} error={err}");
                Err(StoreError::Read(err))
            }
        }
    }

    fn list_activities(&self) -> StoreResult<Vec<Activity>> {
        let started_at = Instant::now();
        let mut stmt = self.conn.prepare_cached(LIST_SQL).map_err(StoreError::Read)?;

        let activities = stmt
            .query_map([], activity_from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|err| {
                error!("event=activity_list module=store status=error error={err}");
                StoreError::Read(err)
            })?;

        debug!(
            "event=activity_list module=store status=ok count={} duration_ms={}",
            activities.len(),
            started_at.elapsed().as_millis()
        );
        Ok(activities)
    }
}

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    let raw_id: i64 = row.get("id")?;
    let id = ActivityId::try_from(raw_id)
        .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, raw_id))?;

    Ok(Activity {
        id,
        time: row.get("time")?,
        // Column is nullable; rows written elsewhere may hold NULL.
        description: row.get::<_, Option<String>>("description")?.unwrap_or_default(),
    })
}
