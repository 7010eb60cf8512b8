//! # pathway-planning
//!
//! Builds and maintains learning paths: sequence a course's competencies,
//! size the work per competency, pick style-compatible resources, track
//! progress, and adapt the plan to performance signals.

pub mod adaptation;
pub mod engine;
pub mod outcome;
pub mod prerequisite_graph;
pub mod progress;
pub mod selector;
pub mod sequencer;
pub mod step_planner;

pub use adaptation::{AdaptationController, ChallengeMutator, PlanMutator, ReinforcementMutator};
pub use engine::PathEngine;
pub use outcome::{AdaptationOutcome, GenerationOutcome, PlanningWarning};
pub use selector::{ResourceSelector, Selection};
pub use sequencer::{CompetencySequencer, Sequence, SequencedCompetency};
pub use step_planner::StepPlanner;
