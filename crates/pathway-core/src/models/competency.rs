use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A gradable curriculum topic. Immutable once a course is set up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub id: String,
    pub course_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Weight in course-level evaluation.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Ids of competencies that should be scheduled first.
    #[serde(default)]
    pub prerequisites: BTreeSet<String>,
    #[serde(default)]
    pub estimated_hours: Option<u32>,
}

fn default_weight() -> f64 {
    1.0
}

impl Competency {
    pub fn new(id: impl Into<String>, course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            name: name.into(),
            description: None,
            weight: default_weight(),
            prerequisites: BTreeSet::new(),
            estimated_hours: None,
        }
    }

    /// Builder-style helper to set prerequisites.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
