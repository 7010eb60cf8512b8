use crate::errors::PathwayResult;
use crate::models::DiagnosticScoreMap;

/// Source of a learner's diagnostic results for a course.
pub trait DiagnosticScoreProvider: Send + Sync {
    /// Per-competency percentages; may be empty.
    fn get_scores(&self, learner_id: &str, course_id: &str) -> PathwayResult<DiagnosticScoreMap>;
}
