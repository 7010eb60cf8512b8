//! v003: learning_paths, path_steps.

use rusqlite::Connection;

use pathway_core::errors::PathwayResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> PathwayResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS learning_paths (
            id                    TEXT PRIMARY KEY,
            learner_id            TEXT NOT NULL,
            course_id             TEXT NOT NULL,
            title                 TEXT NOT NULL,
            learning_style        TEXT,
            total_steps           INTEGER NOT NULL DEFAULT 0,
            current_step          INTEGER NOT NULL DEFAULT 0,
            completion_percentage REAL NOT NULL DEFAULT 0.0,
            estimated_minutes     INTEGER NOT NULL DEFAULT 0,
            is_active             INTEGER NOT NULL DEFAULT 1,
            is_completed          INTEGER NOT NULL DEFAULT 0,
            created_at            TEXT NOT NULL,
            started_at            TEXT,
            completed_at          TEXT
        );

        -- At most one active path per learner and course.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_learning_paths_active
            ON learning_paths(learner_id, course_id) WHERE is_active = 1;

        CREATE TABLE IF NOT EXISTS path_steps (
            id                TEXT PRIMARY KEY,
            path_id           TEXT NOT NULL REFERENCES learning_paths(id) ON DELETE CASCADE,
            step_order        INTEGER NOT NULL,
            resource_id       TEXT NOT NULL REFERENCES resources(id),
            competency_id     TEXT NOT NULL,
            title             TEXT NOT NULL,
            kind              TEXT NOT NULL DEFAULT 'core',
            status            TEXT NOT NULL DEFAULT 'pending',
            estimated_minutes INTEGER NOT NULL,
            points            INTEGER NOT NULL,
            started_at        TEXT,
            completed_at      TEXT,
            UNIQUE (path_id, step_order)
        );

        CREATE INDEX IF NOT EXISTS idx_path_steps_path ON path_steps(path_id, step_order);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
