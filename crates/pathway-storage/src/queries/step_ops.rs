//! Path steps.

use rusqlite::{params, Connection};

use pathway_core::errors::{PathwayError, PathwayResult};
use pathway_core::models::{Step, StepKind, StepStatus};

use super::{parse_enum, parse_opt_ts};
use crate::{map_sqlite_err, to_storage_err};

/// Insert steps for a path. Callers own the surrounding transaction.
pub fn insert_steps(conn: &Connection, path_id: &str, steps: &[Step]) -> PathwayResult<()> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO path_steps (
                id, path_id, step_order, resource_id, competency_id, title, kind,
                status, estimated_minutes, points, started_at, completed_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for step in steps {
        stmt.execute(params![
            step.id,
            path_id,
            step.order,
            step.resource_id,
            step.competency_id,
            step.title,
            step.kind.as_str(),
            step.status.as_str(),
            step.estimated_minutes,
            step.points,
            step.started_at.map(|t| t.to_rfc3339()),
            step.completed_at.map(|t| t.to_rfc3339()),
        ])
        .map_err(|e| map_sqlite_err(&format!("insert step {}", step.order), e))?;
    }
    Ok(())
}

/// Steps of a path ordered by `step_order`.
pub fn list_steps(conn: &Connection, path_id: &str) -> PathwayResult<Vec<Step>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, step_order, resource_id, competency_id, title, kind, status,
                    estimated_minutes, points, started_at, completed_at
             FROM path_steps WHERE path_id = ?1 ORDER BY step_order",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![path_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, u32>(7)?,
                row.get::<_, u32>(8)?,
                row.get::<_, Option<String>>(9)?,
                row.get::<_, Option<String>>(10)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut steps = Vec::new();
    for row in rows {
        let (id, order, resource_id, competency_id, title, kind, status, minutes, points, started, completed) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        steps.push(Step {
            id,
            order,
            resource_id,
            competency_id,
            title,
            kind: parse_enum::<StepKind>(&kind)?,
            status: parse_enum::<StepStatus>(&status)?,
            estimated_minutes: minutes,
            points,
            started_at: parse_opt_ts(started)?,
            completed_at: parse_opt_ts(completed)?,
        });
    }
    Ok(steps)
}

/// Write a step's status and timestamps.
pub fn update_step_status(conn: &Connection, path_id: &str, step: &Step) -> PathwayResult<()> {
    let changed = conn
        .execute(
            "UPDATE path_steps SET status = ?1, started_at = ?2, completed_at = ?3
             WHERE path_id = ?4 AND step_order = ?5",
            params![
                step.status.as_str(),
                step.started_at.map(|t| t.to_rfc3339()),
                step.completed_at.map(|t| t.to_rfc3339()),
                path_id,
                step.order,
            ],
        )
        .map_err(|e| map_sqlite_err("update_step_status", e))?;
    if changed == 0 {
        return Err(PathwayError::StepNotFound {
            path_id: path_id.to_string(),
            order: step.order,
        });
    }
    Ok(())
}
