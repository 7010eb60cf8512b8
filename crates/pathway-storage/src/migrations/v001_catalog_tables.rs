//! v001: competencies, competency_prerequisites, resources.

use rusqlite::Connection;

use pathway_core::errors::PathwayResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> PathwayResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS competencies (
            id              TEXT PRIMARY KEY,
            course_id       TEXT NOT NULL,
            name            TEXT NOT NULL,
            description     TEXT,
            weight          REAL NOT NULL DEFAULT 1.0,
            estimated_hours INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_competencies_course ON competencies(course_id);

        -- prerequisite_id is not a foreign key: it may name a competency of another course.
        CREATE TABLE IF NOT EXISTS competency_prerequisites (
            competency_id   TEXT NOT NULL REFERENCES competencies(id) ON DELETE CASCADE,
            prerequisite_id TEXT NOT NULL,
            PRIMARY KEY (competency_id, prerequisite_id)
        );

        CREATE TABLE IF NOT EXISTS resources (
            id                TEXT PRIMARY KEY,
            competency_id     TEXT NOT NULL REFERENCES competencies(id) ON DELETE CASCADE,
            title             TEXT NOT NULL,
            kind              TEXT NOT NULL,
            style_visual      REAL,
            style_auditory    REAL,
            style_reading     REAL,
            style_kinesthetic REAL,
            duration_minutes  INTEGER,
            points            INTEGER,
            is_active         INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_resources_competency ON resources(competency_id, is_active);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
