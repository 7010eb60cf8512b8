use crate::errors::PathwayResult;
use crate::models::{LearningPath, Step};

/// Transactional persistence boundary for learning paths.
pub trait PathStore: Send + Sync {
    /// The active path for (learner, course), with steps ordered.
    fn find_active_path(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> PathwayResult<Option<LearningPath>>;

    fn get_path(&self, path_id: &str) -> PathwayResult<Option<LearningPath>>;

    /// Persist a new path and all of its steps atomically.
    /// Fails with `DuplicateActivePath` when an active path already exists.
    fn create_path(&self, path: &LearningPath) -> PathwayResult<()>;

    /// Persist the step with `order` and the path's progress fields in one
    /// transaction.
    fn save_step_transition(&self, path: &LearningPath, order: u32) -> PathwayResult<()>;

    /// Insert `new_steps` (already part of `path.steps`) and the path's
    /// updated totals and progress in one transaction.
    fn append_steps(&self, path: &LearningPath, new_steps: &[Step]) -> PathwayResult<()>;

    /// Mark a path inactive so a new one can be generated.
    fn deactivate_path(&self, path_id: &str) -> PathwayResult<()>;
}
