//! Learning paths: atomic creation, progress writes, adaptation appends.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use pathway_core::errors::{PathwayError, PathwayResult};
use pathway_core::models::{LearningPath, LearningStyle, Step};

use super::step_ops;
use super::{parse_enum, parse_opt_ts, parse_ts};
use crate::{is_unique_violation, map_sqlite_err, to_storage_err};

/// Run `f` inside an IMMEDIATE transaction, rolling back on any error.
fn in_immediate_tx<T>(
    conn: &Connection,
    label: &str,
    f: impl FnOnce(&Connection) -> PathwayResult<T>,
) -> PathwayResult<T> {
    let tx = rusqlite::Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("{label} begin: {e}")))?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{label} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Insert a path and all of its steps as one unit. An existing active path
/// for the same (learner, course) yields `DuplicateActivePath` and nothing
/// is written.
pub fn create_path(conn: &Connection, path: &LearningPath) -> PathwayResult<()> {
    in_immediate_tx(conn, "create_path", |conn| {
        if path.is_active && active_path_id(conn, &path.learner_id, &path.course_id)?.is_some() {
            return Err(duplicate(path));
        }
        insert_path_row(conn, path)?;
        step_ops::insert_steps(conn, &path.id, &path.steps)
    })
}

fn duplicate(path: &LearningPath) -> PathwayError {
    PathwayError::DuplicateActivePath {
        learner_id: path.learner_id.clone(),
        course_id: path.course_id.clone(),
    }
}

fn insert_path_row(conn: &Connection, path: &LearningPath) -> PathwayResult<()> {
    conn.execute(
        "INSERT INTO learning_paths (
            id, learner_id, course_id, title, learning_style, total_steps, current_step,
            completion_percentage, estimated_minutes, is_active, is_completed,
            created_at, started_at, completed_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            path.id,
            path.learner_id,
            path.course_id,
            path.title,
            path.learning_style.map(LearningStyle::as_str),
            path.total_steps,
            path.current_step,
            path.completion_percentage,
            path.estimated_minutes,
            path.is_active as i32,
            path.is_completed as i32,
            path.created_at.to_rfc3339(),
            path.started_at.map(|t| t.to_rfc3339()),
            path.completed_at.map(|t| t.to_rfc3339()),
        ],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            duplicate(path)
        } else {
            map_sqlite_err("create_path", e)
        }
    })?;
    Ok(())
}

fn active_path_id(
    conn: &Connection,
    learner_id: &str,
    course_id: &str,
) -> PathwayResult<Option<String>> {
    conn.query_row(
        "SELECT id FROM learning_paths
         WHERE learner_id = ?1 AND course_id = ?2 AND is_active = 1",
        params![learner_id, course_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn find_active_path(
    conn: &Connection,
    learner_id: &str,
    course_id: &str,
) -> PathwayResult<Option<LearningPath>> {
    match active_path_id(conn, learner_id, course_id)? {
        Some(id) => get_path(conn, &id),
        None => Ok(None),
    }
}

/// Load a path with its steps.
pub fn get_path(conn: &Connection, path_id: &str) -> PathwayResult<Option<LearningPath>> {
    let row = conn
        .query_row(
            "SELECT id, learner_id, course_id, title, learning_style, total_steps, current_step,
                    completion_percentage, estimated_minutes, is_active, is_completed,
                    created_at, started_at, completed_at
             FROM learning_paths WHERE id = ?1",
            params![path_id],
            |row| {
                Ok(PathRow {
                    id: row.get(0)?,
                    learner_id: row.get(1)?,
                    course_id: row.get(2)?,
                    title: row.get(3)?,
                    learning_style: row.get(4)?,
                    total_steps: row.get(5)?,
                    current_step: row.get(6)?,
                    completion_percentage: row.get(7)?,
                    estimated_minutes: row.get(8)?,
                    is_active: row.get::<_, i32>(9)? != 0,
                    is_completed: row.get::<_, i32>(10)? != 0,
                    created_at: row.get(11)?,
                    started_at: row.get(12)?,
                    completed_at: row.get(13)?,
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some(row) = row else {
        return Ok(None);
    };
    let steps = step_ops::list_steps(conn, &row.id)?;
    row.into_path(steps).map(Some)
}

struct PathRow {
    id: String,
    learner_id: String,
    course_id: String,
    title: String,
    learning_style: Option<String>,
    total_steps: u32,
    current_step: u32,
    completion_percentage: f64,
    estimated_minutes: u32,
    is_active: bool,
    is_completed: bool,
    created_at: String,
    started_at: Option<String>,
    completed_at: Option<String>,
}

impl PathRow {
    fn into_path(self, steps: Vec<Step>) -> PathwayResult<LearningPath> {
        Ok(LearningPath {
            id: self.id,
            learner_id: self.learner_id,
            course_id: self.course_id,
            title: self.title,
            learning_style: self
                .learning_style
                .as_deref()
                .map(parse_enum::<LearningStyle>)
                .transpose()?,
            steps,
            total_steps: self.total_steps,
            current_step: self.current_step,
            completion_percentage: self.completion_percentage,
            estimated_minutes: self.estimated_minutes,
            is_active: self.is_active,
            is_completed: self.is_completed,
            created_at: parse_ts(&self.created_at)?,
            started_at: parse_opt_ts(self.started_at)?,
            completed_at: parse_opt_ts(self.completed_at)?,
        })
    }
}

/// Write the path's totals and progress fields.
fn update_progress(conn: &Connection, path: &LearningPath) -> PathwayResult<()> {
    let changed = conn
        .execute(
            "UPDATE learning_paths SET
                total_steps = ?1, current_step = ?2, completion_percentage = ?3,
                estimated_minutes = ?4, is_completed = ?5, started_at = ?6, completed_at = ?7
             WHERE id = ?8",
            params![
                path.total_steps,
                path.current_step,
                path.completion_percentage,
                path.estimated_minutes,
                path.is_completed as i32,
                path.started_at.map(|t| t.to_rfc3339()),
                path.completed_at.map(|t| t.to_rfc3339()),
                path.id,
            ],
        )
        .map_err(|e| map_sqlite_err("update_progress", e))?;
    if changed == 0 {
        return Err(PathwayError::not_found("learning path", path.id.clone()));
    }
    Ok(())
}

/// Persist one step's new status together with the path's progress.
pub fn save_step_transition(conn: &Connection, path: &LearningPath, order: u32) -> PathwayResult<()> {
    let step = path.step(order).ok_or_else(|| PathwayError::StepNotFound {
        path_id: path.id.clone(),
        order,
    })?;
    in_immediate_tx(conn, "save_step_transition", |conn| {
        step_ops::update_step_status(conn, &path.id, step)?;
        update_progress(conn, path)
    })
}

/// Insert appended steps and the path's new totals together.
pub fn append_steps(conn: &Connection, path: &LearningPath, new_steps: &[Step]) -> PathwayResult<()> {
    in_immediate_tx(conn, "append_steps", |conn| {
        step_ops::insert_steps(conn, &path.id, new_steps)?;
        update_progress(conn, path)
    })
}

pub fn deactivate_path(conn: &Connection, path_id: &str) -> PathwayResult<()> {
    let changed = conn
        .execute(
            "UPDATE learning_paths SET is_active = 0 WHERE id = ?1",
            params![path_id],
        )
        .map_err(|e| map_sqlite_err("deactivate_path", e))?;
    if changed == 0 {
        return Err(PathwayError::not_found("learning path", path_id));
    }
    Ok(())
}
