use serde::{Deserialize, Serialize};

use super::defaults;

/// One row of the remediation banding table: scores at or above
/// `min_score` need `steps` plan steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepBand {
    pub min_score: f64,
    pub steps: usize,
}

/// Path generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Score assumed for competencies without a diagnostic result.
    pub default_diagnostic_score: f64,
    /// Bands ordered by descending `min_score`.
    pub bands: Vec<StepBand>,
    /// Steps for scores below every band.
    pub fallback_steps: usize,
    /// Estimated minutes for resources without a duration.
    pub default_step_minutes: u32,
    /// Points for resources without a point value.
    pub default_step_points: u32,
}

impl PlanningConfig {
    /// The stock 80/60/40 table.
    pub fn default_bands() -> Vec<StepBand> {
        vec![
            StepBand {
                min_score: 80.0,
                steps: 1,
            },
            StepBand {
                min_score: 60.0,
                steps: 2,
            },
            StepBand {
                min_score: 40.0,
                steps: 3,
            },
        ]
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_diagnostic_score: defaults::DEFAULT_DIAGNOSTIC_SCORE,
            bands: Self::default_bands(),
            fallback_steps: defaults::DEFAULT_FALLBACK_STEPS,
            default_step_minutes: defaults::DEFAULT_STEP_MINUTES,
            default_step_points: defaults::DEFAULT_STEP_POINTS,
        }
    }
}
