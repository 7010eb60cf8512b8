use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a single plan step.
///
/// `Pending → InProgress → Completed`, with `Skipped` as an alternate
/// terminal state. Nothing ever returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl StepStatus {
    pub const ALL: [StepStatus; 4] = [
        StepStatus::Pending,
        StepStatus::InProgress,
        StepStatus::Completed,
        StepStatus::Skipped,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }

    /// Completed or skipped.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }

    pub fn can_transition_to(self, next: StepStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::InProgress | Self::Completed | Self::Skipped) => true,
            (Self::InProgress, Self::Completed | Self::Skipped) => true,
            _ => false,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown step status: {s}"))
    }
}

/// Why a step is in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Created at generation time.
    #[default]
    Core,
    /// Appended for a struggling learner.
    Reinforcement,
    /// Appended for an excelling learner.
    Challenge,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Reinforcement => "reinforcement",
            Self::Challenge => "challenge",
        }
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Self::Core),
            "reinforcement" => Ok(Self::Reinforcement),
            "challenge" => Ok(Self::Challenge),
            other => Err(format!("unknown step kind: {other}")),
        }
    }
}

/// One resource-backed activity in a learning path.
/// Only `status` and its timestamps change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    /// 1-based, contiguous within a path.
    pub order: u32,
    pub resource_id: String,
    pub competency_id: String,
    pub title: String,
    pub kind: StepKind,
    pub status: StepStatus,
    pub estimated_minutes: u32,
    pub points: u32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Step {
    /// A fresh pending step with a generated id.
    pub fn pending(
        order: u32,
        resource_id: impl Into<String>,
        competency_id: impl Into<String>,
        title: impl Into<String>,
        kind: StepKind,
        estimated_minutes: u32,
        points: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            order,
            resource_id: resource_id.into(),
            competency_id: competency_id.into(),
            title: title.into(),
            kind,
            status: StepStatus::Pending,
            estimated_minutes,
            points,
            started_at: None,
            completed_at: None,
        }
    }
}
