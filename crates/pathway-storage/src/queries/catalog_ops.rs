//! Competencies, prerequisites, and resources.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension};

use pathway_core::errors::PathwayResult;
use pathway_core::models::{Competency, Resource, ResourceKind, StyleVector};

use super::parse_enum;
use crate::{map_sqlite_err, to_storage_err};

/// Insert or replace a competency and its prerequisite set atomically.
/// Catalogue order is insertion order; updates keep the original position.
pub fn upsert_competency(conn: &Connection, competency: &Competency) -> PathwayResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert_competency begin: {e}")))?;

    match upsert_competency_inner(&tx, competency) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("upsert_competency commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn upsert_competency_inner(conn: &Connection, competency: &Competency) -> PathwayResult<()> {
    conn.execute(
        "INSERT INTO competencies (id, course_id, name, description, weight, estimated_hours)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            course_id = excluded.course_id,
            name = excluded.name,
            description = excluded.description,
            weight = excluded.weight,
            estimated_hours = excluded.estimated_hours",
        params![
            competency.id,
            competency.course_id,
            competency.name,
            competency.description,
            competency.weight,
            competency.estimated_hours,
        ],
    )
    .map_err(|e| map_sqlite_err("upsert_competency", e))?;

    conn.execute(
        "DELETE FROM competency_prerequisites WHERE competency_id = ?1",
        params![competency.id],
    )
    .map_err(|e| map_sqlite_err("upsert_competency prerequisites", e))?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO competency_prerequisites (competency_id, prerequisite_id) VALUES (?1, ?2)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for prerequisite in &competency.prerequisites {
        stmt.execute(params![competency.id, prerequisite])
            .map_err(|e| map_sqlite_err("upsert_competency prerequisites", e))?;
    }
    Ok(())
}

/// Competencies of a course in catalogue order, prerequisites attached.
pub fn list_competencies(conn: &Connection, course_id: &str) -> PathwayResult<Vec<Competency>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, course_id, name, description, weight, estimated_hours
             FROM competencies WHERE course_id = ?1 ORDER BY rowid",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut competencies = stmt
        .query_map(params![course_id], |row| {
            Ok(Competency {
                id: row.get(0)?,
                course_id: row.get(1)?,
                name: row.get(2)?,
                description: row.get(3)?,
                weight: row.get(4)?,
                prerequisites: BTreeSet::new(),
                estimated_hours: row.get(5)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut prereq_stmt = conn
        .prepare_cached(
            "SELECT prerequisite_id FROM competency_prerequisites WHERE competency_id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for competency in &mut competencies {
        competency.prerequisites = prereq_stmt
            .query_map(params![competency.id], |row| row.get::<_, String>(0))
            .map_err(|e| to_storage_err(e.to_string()))?
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(competencies)
}

/// Insert or replace a resource. Fails with a constraint violation when the
/// owning competency does not exist.
pub fn upsert_resource(conn: &Connection, resource: &Resource) -> PathwayResult<()> {
    let scores = resource.style_scores;
    conn.execute(
        "INSERT INTO resources (
            id, competency_id, title, kind, style_visual, style_auditory,
            style_reading, style_kinesthetic, duration_minutes, points, is_active
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(id) DO UPDATE SET
            competency_id = excluded.competency_id,
            title = excluded.title,
            kind = excluded.kind,
            style_visual = excluded.style_visual,
            style_auditory = excluded.style_auditory,
            style_reading = excluded.style_reading,
            style_kinesthetic = excluded.style_kinesthetic,
            duration_minutes = excluded.duration_minutes,
            points = excluded.points,
            is_active = excluded.is_active",
        params![
            resource.id,
            resource.competency_id,
            resource.title,
            resource.kind.as_str(),
            scores.map(|s| s.visual),
            scores.map(|s| s.auditory),
            scores.map(|s| s.reading),
            scores.map(|s| s.kinesthetic),
            resource.duration_minutes,
            resource.points,
            resource.is_active as i32,
        ],
    )
    .map_err(|e| map_sqlite_err("upsert_resource", e))?;
    Ok(())
}

const RESOURCE_COLUMNS: &str = "id, competency_id, title, kind, style_visual, style_auditory,
    style_reading, style_kinesthetic, duration_minutes, points, is_active";

/// Active resources of a competency in catalogue order.
pub fn get_active_resources(conn: &Connection, competency_id: &str) -> PathwayResult<Vec<Resource>> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources
             WHERE competency_id = ?1 AND is_active = 1 ORDER BY rowid"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![competency_id], ResourceRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().map(ResourceRow::into_resource).collect()
}

pub fn get_resource(conn: &Connection, id: &str) -> PathwayResult<Option<Resource>> {
    let row = conn
        .query_row(
            &format!("SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = ?1"),
            params![id],
            ResourceRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(ResourceRow::into_resource).transpose()
}

struct ResourceRow {
    id: String,
    competency_id: String,
    title: String,
    kind: String,
    scores: [Option<f64>; 4],
    duration_minutes: Option<u32>,
    points: Option<u32>,
    is_active: bool,
}

impl ResourceRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            competency_id: row.get(1)?,
            title: row.get(2)?,
            kind: row.get(3)?,
            scores: [row.get(4)?, row.get(5)?, row.get(6)?, row.get(7)?],
            duration_minutes: row.get(8)?,
            points: row.get(9)?,
            is_active: row.get::<_, i32>(10)? != 0,
        })
    }

    fn into_resource(self) -> PathwayResult<Resource> {
        let kind: ResourceKind = parse_enum(&self.kind)?;
        let style_scores = match self.scores {
            [Some(v), Some(a), Some(r), Some(k)] => Some(StyleVector::new(v, a, r, k)),
            _ => None,
        };
        Ok(Resource {
            id: self.id,
            competency_id: self.competency_id,
            title: self.title,
            kind,
            style_scores,
            duration_minutes: self.duration_minutes,
            points: self.points,
            is_active: self.is_active,
        })
    }
}
