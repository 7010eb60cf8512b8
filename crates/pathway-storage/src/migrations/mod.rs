//! Schema migrations tracked with `PRAGMA user_version`.

pub mod v001_catalog_tables;
pub mod v002_learner_tables;
pub mod v003_path_tables;

use rusqlite::Connection;
use tracing::info;

use pathway_core::errors::{PathwayError, PathwayResult, StorageError};

type MigrationFn = fn(&Connection) -> PathwayResult<()>;

/// Ordered migrations; the version is the 1-based position.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "catalog_tables", v001_catalog_tables::migrate),
    (2, "learner_tables", v002_learner_tables::migrate),
    (3, "path_tables", v003_path_tables::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Apply every pending migration, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> PathwayResult<u32> {
    let current = current_version(conn)?;

    for (version, name, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        let failed = |reason: String| {
            PathwayError::Storage(StorageError::MigrationFailed {
                version: *version,
                reason,
            })
        };
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| failed(e.to_string()))?;
        match migrate(&tx) {
            Ok(()) => {
                tx.pragma_update(None, "user_version", version)
                    .map_err(|e| failed(e.to_string()))?;
                tx.commit().map_err(|e| failed(e.to_string()))?;
                info!(version, name, "applied migration");
            }
            Err(e) => {
                let _ = tx.rollback();
                return Err(failed(e.to_string()));
            }
        }
    }

    current_version(conn)
}

pub fn current_version(conn: &Connection) -> PathwayResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            PathwayError::Storage(StorageError::MigrationFailed {
                version: 0,
                reason: e.to_string(),
            })
        })
}
