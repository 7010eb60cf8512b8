//! # pathway-storage
//!
//! SQLite store for Pathway. One write connection behind a mutex, a
//! round-robin read pool for file-backed databases, versioned migrations,
//! and query modules that keep every multi-row write inside a single
//! transaction.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use pathway_core::errors::{PathwayError, StorageError};

/// Wrap a message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> PathwayError {
    PathwayError::Storage(StorageError::Sqlite {
        message: message.into(),
    })
}

/// Map a rusqlite error, keeping constraint violations distinguishable.
pub(crate) fn map_sqlite_err(context: &str, err: rusqlite::Error) -> PathwayError {
    if is_constraint_violation(&err) {
        PathwayError::Storage(StorageError::ConstraintViolation {
            message: format!("{context}: {err}"),
        })
    } else {
        to_storage_err(format!("{context}: {err}"))
    }
}

pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
