//! Learner style profiles.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use pathway_core::errors::{PathwayError, PathwayResult};
use pathway_core::models::{LearningStyle, StyleProfile, StyleVector};

use super::{parse_enum, parse_ts};
use crate::{map_sqlite_err, to_storage_err};

pub fn get_profile(conn: &Connection, learner_id: &str) -> PathwayResult<Option<StyleProfile>> {
    let row = conn
        .query_row(
            "SELECT visual, auditory, reading, kinesthetic, dominant, answered, dropped, recorded_at
             FROM style_profiles WHERE learner_id = ?1",
            params![learner_id],
            |row| {
                Ok((
                    StyleVector::new(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?),
                    row.get::<_, String>(4)?,
                    row.get::<_, i64>(5)?,
                    row.get::<_, i64>(6)?,
                    row.get::<_, String>(7)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((scores, dominant, answered, dropped, recorded_at)) = row else {
        return Ok(None);
    };
    let dominant: LearningStyle = parse_enum(&dominant)?;
    Ok(Some(StyleProfile {
        scores,
        dominant,
        answered: answered.max(0) as usize,
        dropped: dropped.max(0) as usize,
        recorded_at: parse_ts(&recorded_at)?,
    }))
}

/// Save a profile. Without `replace`, an existing profile is left alone and
/// `ProfileAlreadyRecorded` is returned.
pub fn save_profile(
    conn: &Connection,
    learner_id: &str,
    profile: &StyleProfile,
    replace: bool,
) -> PathwayResult<()> {
    let tx = rusqlite::Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("save_profile begin: {e}")))?;

    match save_profile_inner(&tx, learner_id, profile, replace) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("save_profile commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn save_profile_inner(
    conn: &Connection,
    learner_id: &str,
    profile: &StyleProfile,
    replace: bool,
) -> PathwayResult<()> {
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM style_profiles WHERE learner_id = ?1)",
            params![learner_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if exists && !replace {
        return Err(PathwayError::ProfileAlreadyRecorded {
            learner_id: learner_id.to_string(),
        });
    }

    let scores = &profile.scores;
    conn.execute(
        "INSERT INTO style_profiles (
            learner_id, visual, auditory, reading, kinesthetic, dominant, answered, dropped, recorded_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(learner_id) DO UPDATE SET
            visual = excluded.visual,
            auditory = excluded.auditory,
            reading = excluded.reading,
            kinesthetic = excluded.kinesthetic,
            dominant = excluded.dominant,
            answered = excluded.answered,
            dropped = excluded.dropped,
            recorded_at = excluded.recorded_at",
        params![
            learner_id,
            scores.visual,
            scores.auditory,
            scores.reading,
            scores.kinesthetic,
            profile.dominant.as_str(),
            profile.answered as i64,
            profile.dropped as i64,
            profile.recorded_at.to_rfc3339(),
        ],
    )
    .map_err(|e| map_sqlite_err("save_profile", e))?;
    Ok(())
}
