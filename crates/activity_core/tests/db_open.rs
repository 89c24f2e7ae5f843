use activity_core::db::{open_db, open_db_in_memory, DbError};
use activity_core::{
    ActivityRepository, ActivityStore, NewActivity, StoreConfig, StoreError, DEFAULT_BUSY_TIMEOUT,
};
use chrono::{TimeZone, Utc};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_activities_table() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(
        column_names(&conn, "activities"),
        vec!["id", "time", "description"]
    );
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("activities.db");

    let first = open_db(&path, DEFAULT_BUSY_TIMEOUT).unwrap();
    first
        .execute(
            "INSERT INTO activities (time, description) VALUES ('2024-01-01 00:00:00+00:00', 'kept');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path, DEFAULT_BUSY_TIMEOUT).unwrap();
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM activities;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn open_in_missing_directory_is_initialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("no-such-dir").join("activities.db"));

    let err = ActivityStore::open(&config).unwrap_err();
    assert!(matches!(err, StoreError::Initialization(DbError::Sqlite(_))));
}

#[test]
fn incompatible_existing_table_is_initialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE activities (id INTEGER PRIMARY KEY, label TEXT);")
        .unwrap();
    drop(conn);

    let err = ActivityStore::open(&StoreConfig::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Initialization(DbError::MissingRequiredColumn {
            table: "activities",
            column: "time"
        })
    ));
}

#[test]
fn store_opened_over_plain_file_works_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.db");

    let store = ActivityStore::open(&StoreConfig::new(&path)).unwrap();
    assert!(store.list_activities().unwrap().is_empty());
    store.close().unwrap();

    assert!(path.exists());
}

#[test]
fn undecodable_time_is_read_error_for_retrieve_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.db");

    let store = ActivityStore::open(&StoreConfig::new(&path)).unwrap();

    let writer = Connection::open(&path).unwrap();
    writer
        .execute(
            "INSERT INTO activities (id, time, description) VALUES (5, 'garbage', 'broken');",
            [],
        )
        .unwrap();
    drop(writer);

    let retrieve_err = store.retrieve_activity(5).unwrap_err();
    assert!(matches!(retrieve_err, StoreError::Read(_)));

    let list_err = store.list_activities().unwrap_err();
    assert!(matches!(list_err, StoreError::Read(_)));
}

#[test]
fn rejected_insert_is_write_error_and_statement_stays_usable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checked.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE activities (
            id INTEGER NOT NULL PRIMARY KEY,
            time DATETIME NOT NULL,
            description TEXT CHECK (length(description) > 0)
        );",
    )
    .unwrap();
    drop(conn);

    let store = ActivityStore::open(&StoreConfig::new(&path)).unwrap();
    let time = Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap();

    let err = store
        .insert_activity(&NewActivity::new(time, ""))
        .unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));

    let id = store
        .insert_activity(&NewActivity::new(time, "valid"))
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(store.retrieve_activity(id).unwrap().description, "valid");
    store.close().unwrap();
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid;")
        .unwrap();
    stmt.query_map([table], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}
