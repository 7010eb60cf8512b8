use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LearningStyle, Step, StepStatus};

/// A learner's ordered plan for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub learner_id: String,
    pub course_id: String,
    pub title: String,
    /// Dominant style at generation time, if the learner had a profile.
    pub learning_style: Option<LearningStyle>,
    /// Ordered by `Step::order`.
    pub steps: Vec<Step>,
    pub total_steps: u32,
    /// Number of leading steps that are finished; the next step has
    /// order `current_step + 1`.
    pub current_step: u32,
    pub completion_percentage: f64,
    pub estimated_minutes: u32,
    pub is_active: bool,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl LearningPath {
    /// An empty, active path with a generated id.
    pub fn new(
        learner_id: impl Into<String>,
        course_id: impl Into<String>,
        title: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            learner_id: learner_id.into(),
            course_id: course_id.into(),
            title: title.into(),
            learning_style: None,
            steps: Vec::new(),
            total_steps: 0,
            current_step: 0,
            completion_percentage: 0.0,
            estimated_minutes: 0,
            is_active: true,
            is_completed: false,
            created_at: now,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn step(&self, order: u32) -> Option<&Step> {
        self.steps.iter().find(|s| s.order == order)
    }

    pub fn step_mut(&mut self, order: u32) -> Option<&mut Step> {
        self.steps.iter_mut().find(|s| s.order == order)
    }

    pub fn completed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Completed)
            .count()
    }

    /// Highest step order in the path, 0 when empty.
    pub fn last_order(&self) -> u32 {
        self.steps.iter().map(|s| s.order).max().unwrap_or(0)
    }

    /// Resource ids already scheduled in this path.
    pub fn resource_ids(&self) -> HashSet<&str> {
        self.steps.iter().map(|s| s.resource_id.as_str()).collect()
    }

    /// Competency ids in first-appearance order.
    pub fn competency_order(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.steps
            .iter()
            .filter(|s| seen.insert(s.competency_id.as_str()))
            .map(|s| s.competency_id.as_str())
            .collect()
    }

    /// Whether the path is still open for progress and adaptation.
    pub fn is_open(&self) -> bool {
        self.is_active && !self.is_completed
    }
}
