//! Read-only connections to a file database, handed out round-robin.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use pathway_core::errors::{PathwayError, PathwayResult, StorageError};

use super::pragmas;
use crate::to_storage_err;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `size` connections; at least one is always opened.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> PathwayResult<Self> {
        let connections = (0..size.max(1))
            .map(|_| {
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                pragmas::configure_file_reader(&conn, busy_timeout_ms)?;
                Ok(Mutex::new(conn))
            })
            .collect::<PathwayResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx].lock().map_err(|e| {
            PathwayError::Storage(StorageError::LockPoisoned {
                details: format!("read connection {idx}: {e}"),
            })
        })?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
