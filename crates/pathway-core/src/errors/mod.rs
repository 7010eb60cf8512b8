//! Error handling for Pathway.
//! One error enum per subsystem, `thiserror` only, aggregated into [`PathwayError`].

mod config_error;
mod storage_error;
mod survey_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;
pub use survey_error::SurveyError;

use crate::models::StepStatus;

/// Result alias used across the workspace.
pub type PathwayResult<T> = Result<T, PathwayError>;

/// Top-level error for every Pathway operation.
#[derive(Debug, thiserror::Error)]
pub enum PathwayError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid survey response: {0}")]
    InvalidSurveyResponse(#[from] SurveyError),

    #[error("an active path already exists for learner {learner_id} in course {course_id}")]
    DuplicateActivePath {
        learner_id: String,
        course_id: String,
    },

    #[error("step {order} cannot move from {from} to {to}")]
    InvalidStepTransition {
        order: u32,
        from: StepStatus,
        to: StepStatus,
    },

    #[error("path {path_id} has no step with order {order}")]
    StepNotFound { path_id: String, order: u32 },

    #[error("performance signal flags both struggling and excelling")]
    ConflictingSignal,

    #[error("path {path_id} is completed or inactive and cannot be adapted")]
    PathClosed { path_id: String },

    #[error("learner {learner_id} already has a recorded style profile")]
    ProfileAlreadyRecorded { learner_id: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PathwayError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Whether the error leaves persistent state untouched and can be
    /// reported to a learner as-is.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidSurveyResponse(_)
                | Self::InvalidStepTransition { .. }
                | Self::StepNotFound { .. }
                | Self::ConflictingSignal
                | Self::PathClosed { .. }
                | Self::ProfileAlreadyRecorded { .. }
        )
    }
}

impl From<serde_json::Error> for PathwayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
