//! v002: diagnostic_scores, style_profiles.

use rusqlite::Connection;

use pathway_core::errors::PathwayResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> PathwayResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS diagnostic_scores (
            learner_id    TEXT NOT NULL,
            course_id     TEXT NOT NULL,
            competency_id TEXT NOT NULL,
            percentage    REAL NOT NULL CHECK (percentage BETWEEN 0 AND 100),
            recorded_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (learner_id, course_id, competency_id)
        );

        CREATE TABLE IF NOT EXISTS style_profiles (
            learner_id  TEXT PRIMARY KEY,
            visual      REAL NOT NULL,
            auditory    REAL NOT NULL,
            reading     REAL NOT NULL,
            kinesthetic REAL NOT NULL,
            dominant    TEXT NOT NULL,
            answered    INTEGER NOT NULL DEFAULT 0,
            dropped     INTEGER NOT NULL DEFAULT 0,
            recorded_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
