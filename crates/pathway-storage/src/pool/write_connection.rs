//! The single write connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use pathway_core::errors::{PathwayError, PathwayResult, StorageError};

use super::pragmas;
use crate::to_storage_err;

/// All writes serialize on this lock. It is a plain blocking mutex held only
/// for the duration of one closure, so callers on async runtime threads can
/// use it like any other short blocking call.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> PathwayResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure_file_writer(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> PathwayResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::configure_memory(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            PathwayError::Storage(StorageError::LockPoisoned {
                details: format!("write connection: {e}"),
            })
        })?;
        f(&guard)
    }
}
