use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StyleVector;

/// Closed set of resource formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Reading,
    Exercise,
    Quiz,
    Simulation,
    Game,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Video,
        ResourceKind::Reading,
        ResourceKind::Exercise,
        ResourceKind::Quiz,
        ResourceKind::Simulation,
        ResourceKind::Game,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Reading => "reading",
            Self::Exercise => "exercise",
            Self::Quiz => "quiz",
            Self::Simulation => "simulation",
            Self::Game => "game",
        }
    }

    /// Kinds where the learner does something rather than consumes content.
    pub fn is_hands_on(self) -> bool {
        matches!(self, Self::Exercise | Self::Simulation | Self::Game)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown resource kind: {s}"))
    }
}

/// A learning resource attached to one competency. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub competency_id: String,
    pub title: String,
    pub kind: ResourceKind,
    /// Per-resource style compatibility, each component in `[0, 1]`.
    #[serde(default)]
    pub style_scores: Option<StyleVector>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        competency_id: impl Into<String>,
        title: impl Into<String>,
        kind: ResourceKind,
    ) -> Self {
        Self {
            id: id.into(),
            competency_id: competency_id.into(),
            title: title.into(),
            kind,
            style_scores: None,
            duration_minutes: None,
            points: None,
            is_active: true,
        }
    }

    pub fn with_style_scores(mut self, scores: StyleVector) -> Self {
        self.style_scores = Some(scores);
        self
    }

    /// Per-resource scores, if any were actually provided.
    /// An all-zero vector is the catalogue's "never rated" value and is ignored.
    pub fn explicit_style_scores(&self) -> Option<&StyleVector> {
        self.style_scores.as_ref().filter(|s| !s.is_zero())
    }
}
