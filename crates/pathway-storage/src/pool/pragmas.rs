//! Per-connection settings.

use rusqlite::Connection;

use pathway_core::errors::PathwayResult;

use crate::to_storage_err;

/// File writer: WAL so readers never block on path writes, and enforced
/// foreign keys so steps cannot point at unknown resources.
pub fn configure_file_writer(conn: &Connection, busy_timeout_ms: u32) -> PathwayResult<()> {
    batch(
        conn,
        &format!(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {busy_timeout_ms};
             PRAGMA foreign_keys = ON;"
        ),
    )
}

/// File reader: read-only, waits on the writer instead of failing.
pub fn configure_file_reader(conn: &Connection, busy_timeout_ms: u32) -> PathwayResult<()> {
    batch(
        conn,
        &format!(
            "PRAGMA busy_timeout = {busy_timeout_ms};
             PRAGMA query_only = ON;"
        ),
    )
}

/// In-memory database: one connection, so no journal or timeout tuning.
pub fn configure_memory(conn: &Connection) -> PathwayResult<()> {
    batch(conn, "PRAGMA foreign_keys = ON;")
}

/// Current journal mode, lower-cased (`wal`, `memory`, ...).
pub fn journal_mode(conn: &Connection) -> PathwayResult<String> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.to_ascii_lowercase())
}

pub fn foreign_keys_enabled(conn: &Connection) -> PathwayResult<bool> {
    conn.pragma_query_value(None, "foreign_keys", |row| row.get::<_, i64>(0))
        .map(|v| v == 1)
        .map_err(|e| to_storage_err(e.to_string()))
}

fn batch(conn: &Connection, sql: &str) -> PathwayResult<()> {
    conn.execute_batch(sql)
        .map_err(|e| to_storage_err(e.to_string()))
}
