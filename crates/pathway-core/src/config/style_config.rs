use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do with survey answers that do not map to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Exclude from normalization and report the count.
    #[default]
    Count,
    /// Fail the analysis with `InvalidSurveyResponse`.
    Reject,
}

/// Style profiling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub unmapped_policy: UnmappedPolicy,
    /// Percentage at or above which a style counts as a strength.
    pub strength_threshold: f64,
    /// Percentage at or below which a style counts as a weakness.
    pub weakness_threshold: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            unmapped_policy: UnmappedPolicy::default(),
            strength_threshold: defaults::DEFAULT_STRENGTH_THRESHOLD,
            weakness_threshold: defaults::DEFAULT_WEAKNESS_THRESHOLD,
        }
    }
}
