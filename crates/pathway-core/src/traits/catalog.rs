use crate::errors::PathwayResult;
use crate::models::{Competency, Resource};

/// Read access to a course's competencies.
pub trait CompetencyRepository: Send + Sync {
    /// All competencies of a course, in catalogue order. Empty when the
    /// course is unknown.
    fn list(&self, course_id: &str) -> PathwayResult<Vec<Competency>>;
}

/// Read access to learning resources.
pub trait ResourcePool: Send + Sync {
    /// Active resources for a competency, in catalogue order.
    fn get_active(&self, competency_id: &str) -> PathwayResult<Vec<Resource>>;
}
