/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("connection lock poisoned: {details}")]
    LockPoisoned { details: String },
}
