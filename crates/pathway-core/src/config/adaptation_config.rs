use serde::{Deserialize, Serialize};

use super::defaults;

/// Plan adaptation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationConfig {
    /// Number of most recently touched steps considered "recent".
    pub recent_window: usize,
    /// Steps appended for a struggling learner.
    pub reinforcement_steps: usize,
    /// Steps appended for an excelling learner.
    pub challenge_steps: usize,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            recent_window: defaults::DEFAULT_RECENT_WINDOW,
            reinforcement_steps: defaults::DEFAULT_REINFORCEMENT_STEPS,
            challenge_steps: defaults::DEFAULT_CHALLENGE_STEPS,
        }
    }
}
