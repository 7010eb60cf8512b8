use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four VARK sensory preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    /// Fixed precedence used to break ties between equal scores.
    pub const PRECEDENCE: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Reading,
        LearningStyle::Kinesthetic,
    ];

    /// Single-letter survey code.
    pub fn code(self) -> char {
        match self {
            Self::Visual => 'V',
            Self::Auditory => 'A',
            Self::Reading => 'R',
            Self::Kinesthetic => 'K',
        }
    }

    /// Parse a survey code, case-insensitively.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'V' => Some(Self::Visual),
            'A' => Some(Self::Auditory),
            'R' => Some(Self::Reading),
            'K' => Some(Self::Kinesthetic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Reading => "reading",
            Self::Kinesthetic => "kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    /// Accepts either the full name or the single-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(style) = Self::from_code(c) {
                return Ok(style);
            }
        }
        Self::PRECEDENCE
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown learning style: {s}"))
    }
}

/// One value per learning style.
///
/// Used both for learner percentages (0–100) and for resource
/// compatibility weights (0–1); the owner decides the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleVector {
    pub visual: f64,
    pub auditory: f64,
    pub reading: f64,
    pub kinesthetic: f64,
}

impl StyleVector {
    pub fn new(visual: f64, auditory: f64, reading: f64, kinesthetic: f64) -> Self {
        Self {
            visual,
            auditory,
            reading,
            kinesthetic,
        }
    }

    /// Same value in every component.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn get(&self, style: LearningStyle) -> f64 {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Auditory => self.auditory,
            LearningStyle::Reading => self.reading,
            LearningStyle::Kinesthetic => self.kinesthetic,
        }
    }

    pub fn get_mut(&mut self, style: LearningStyle) -> &mut f64 {
        match style {
            LearningStyle::Visual => &mut self.visual,
            LearningStyle::Auditory => &mut self.auditory,
            LearningStyle::Reading => &mut self.reading,
            LearningStyle::Kinesthetic => &mut self.kinesthetic,
        }
    }

    /// Components in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (LearningStyle, f64)> + '_ {
        LearningStyle::PRECEDENCE
            .into_iter()
            .map(move |style| (style, self.get(style)))
    }

    pub fn dot(&self, other: &StyleVector) -> f64 {
        self.iter().map(|(style, v)| v * other.get(style)).sum()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.visual * factor,
            self.auditory * factor,
            self.reading * factor,
            self.kinesthetic * factor,
        )
    }

    pub fn sum(&self) -> f64 {
        self.visual + self.auditory + self.reading + self.kinesthetic
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }
}

/// A learner's normalized style percentages and their dominant style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Percentages, summing to ~100 for well-formed input.
    pub scores: StyleVector,
    pub dominant: LearningStyle,
    /// Survey answers that mapped to a style.
    pub answered: usize,
    /// Survey answers that could not be mapped and were left out.
    pub dropped: usize,
    pub recorded_at: DateTime<Utc>,
}

impl StyleProfile {
    /// Scores rescaled to `[0, 1]` weights for compatibility scoring.
    pub fn weights(&self) -> StyleVector {
        self.scores.scaled(0.01)
    }
}
