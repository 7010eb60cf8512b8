//! # pathway-core
//!
//! Foundation crate for the Pathway learning-path planner.
//! Defines all models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PathwayConfig;
pub use errors::{PathwayError, PathwayResult};
pub use models::{
    Competency, DiagnosticScoreMap, LearningPath, LearningStyle, Resource, ResourceKind, Step,
    StepKind, StepStatus, StyleProfile, StyleVector,
};
