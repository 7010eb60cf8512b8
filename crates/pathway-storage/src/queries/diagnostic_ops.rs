//! Diagnostic scores per (learner, course, competency).

use rusqlite::{params, Connection};

use pathway_core::errors::PathwayResult;
use pathway_core::models::DiagnosticScoreMap;

use crate::{map_sqlite_err, to_storage_err};

/// Record (or overwrite) one diagnostic result. Values are clamped into
/// `[0, 100]`; non-finite values are ignored.
pub fn record_diagnostic(
    conn: &Connection,
    learner_id: &str,
    course_id: &str,
    competency_id: &str,
    percentage: f64,
) -> PathwayResult<()> {
    if !percentage.is_finite() {
        tracing::warn!(learner_id, competency_id, "ignoring non-finite diagnostic score");
        return Ok(());
    }
    conn.execute(
        "INSERT INTO diagnostic_scores (learner_id, course_id, competency_id, percentage)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(learner_id, course_id, competency_id) DO UPDATE SET
            percentage = excluded.percentage,
            recorded_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![learner_id, course_id, competency_id, percentage.clamp(0.0, 100.0)],
    )
    .map_err(|e| map_sqlite_err("record_diagnostic", e))?;
    Ok(())
}

pub fn get_scores(
    conn: &Connection,
    learner_id: &str,
    course_id: &str,
) -> PathwayResult<DiagnosticScoreMap> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT competency_id, percentage FROM diagnostic_scores
             WHERE learner_id = ?1 AND course_id = ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![learner_id, course_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scores = DiagnosticScoreMap::new();
    for row in rows {
        let (competency_id, percentage) = row.map_err(|e| to_storage_err(e.to_string()))?;
        scores.insert(competency_id, percentage);
    }
    Ok(scores)
}
