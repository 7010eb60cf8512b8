//! SQLite connections for one database: a single writer, plus read-only
//! connections when the database lives in a file.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use pathway_core::config::StorageConfig;
use pathway_core::errors::PathwayResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    writer: WriteConnection,
    /// `None` for in-memory databases: a second in-memory connection is a
    /// different, empty database.
    readers: Option<ReadPool>,
    db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// The writer opens first so the file and schema exist before the
    /// read-only connections attach.
    pub fn open(path: &Path, config: &StorageConfig) -> PathwayResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let readers = ReadPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> PathwayResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn readers(&self) -> Option<&ReadPool> {
        self.readers.as_ref()
    }

    /// Run `f` on a read connection, or on the writer when there is no pool.
    pub fn read<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn(f),
        }
    }

    pub fn write<F, T>(&self, f: F) -> PathwayResult<T>
    where
        F: FnOnce(&Connection) -> PathwayResult<T>,
    {
        self.writer.with_conn(f)
    }
}
