//! Table definition for activity storage.

use super::{DbError, DbResult};
use rusqlite::Connection;

pub const ACTIVITIES_TABLE: &str = "activities";

const CREATE_ACTIVITIES_SQL: &str = "CREATE TABLE IF NOT EXISTS activities (
    id INTEGER NOT NULL PRIMARY KEY,
    time DATETIME NOT NULL,
    description TEXT
);";

const REQUIRED_COLUMNS: &[&str] = &["id", "time", "description"];

/// Creates the `activities` table if absent and checks an existing one is compatible.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_ACTIVITIES_SQL)?;

    let columns = table_columns(conn, ACTIVITIES_TABLE)?;
    for &column in REQUIRED_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(DbError::MissingRequiredColumn {
                table: ACTIVITIES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
