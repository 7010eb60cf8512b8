//! StepPlanner: how many steps a competency needs, banded by diagnostic score.

use pathway_core::config::{PlanningConfig, StepBand};

#[derive(Debug, Clone)]
pub struct StepPlanner {
    /// Descending by `min_score`.
    bands: Vec<StepBand>,
    fallback_steps: usize,
}

impl StepPlanner {
    pub fn new(bands: Vec<StepBand>, fallback_steps: usize) -> Self {
        Self {
            bands,
            fallback_steps,
        }
    }

    pub fn from_config(config: &PlanningConfig) -> Self {
        Self::new(config.bands.clone(), config.fallback_steps)
    }

    /// Steps for the first band whose `min_score` the score reaches; the
    /// fallback when it reaches none (including NaN).
    pub fn steps_for(&self, score: f64) -> usize {
        self.bands
            .iter()
            .find(|band| score >= band.min_score)
            .map_or(self.fallback_steps, |band| band.steps)
    }
}

impl Default for StepPlanner {
    fn default() -> Self {
        Self::from_config(&PlanningConfig::default())
    }
}
