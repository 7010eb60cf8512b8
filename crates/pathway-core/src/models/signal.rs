use serde::{Deserialize, Serialize};

use crate::errors::{PathwayError, PathwayResult};

/// External performance signal about a learner on a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSignal {
    #[serde(default)]
    pub struggling: bool,
    #[serde(default)]
    pub excelling: bool,
}

/// The plan mutation a signal asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adaptation {
    Reinforce,
    Challenge,
    None,
}

impl PerformanceSignal {
    pub fn struggling() -> Self {
        Self {
            struggling: true,
            excelling: false,
        }
    }

    pub fn excelling() -> Self {
        Self {
            struggling: false,
            excelling: true,
        }
    }

    /// The flags are mutually exclusive; setting both is a caller error.
    pub fn resolve(self) -> PathwayResult<Adaptation> {
        match (self.struggling, self.excelling) {
            (true, true) => Err(PathwayError::ConflictingSignal),
            (true, false) => Ok(Adaptation::Reinforce),
            (false, true) => Ok(Adaptation::Challenge),
            (false, false) => Ok(Adaptation::None),
        }
    }
}
