//! Results of engine operations.

use pathway_core::models::{Adaptation, LearningPath, Step};
use serde::Serialize;

/// Non-fatal problems met while building a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanningWarning {
    /// No active resources; the competency got no steps.
    EmptyCandidatePool { competency_id: String },
    /// Fewer active resources than the banding table asked for.
    ThinCandidatePool {
        competency_id: String,
        requested: usize,
        available: usize,
    },
    /// Scheduled before its prerequisites: a cycle, or a prerequisite
    /// outside the course.
    ForcedPrerequisite { competency_id: String },
}

impl PlanningWarning {
    pub fn competency_id(&self) -> &str {
        match self {
            Self::EmptyCandidatePool { competency_id }
            | Self::ThinCandidatePool { competency_id, .. }
            | Self::ForcedPrerequisite { competency_id } => competency_id,
        }
    }
}

/// Result of `PathEngine::generate_path`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub path: LearningPath,
    /// False when an existing active path was returned.
    pub created: bool,
    pub warnings: Vec<PlanningWarning>,
}

/// Result of `PathEngine::adapt_path`.
#[derive(Debug, Clone, Serialize)]
pub struct AdaptationOutcome {
    pub adaptation: Adaptation,
    pub path: LearningPath,
    /// Steps added by this adaptation, in order.
    pub appended: Vec<Step>,
}
