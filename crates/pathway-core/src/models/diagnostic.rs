use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_DIAGNOSTIC_SCORE;

/// Diagnostic percentage per competency for one (learner, course).
///
/// Values are clamped into `[0, 100]` on insert; non-finite values are
/// discarded so lookups treat them as missing. Deserialization goes through
/// the same path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct DiagnosticScoreMap(HashMap<String, f64>);

impl DiagnosticScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, competency_id: impl Into<String>, percentage: f64) {
        if percentage.is_finite() {
            self.0
                .insert(competency_id.into(), percentage.clamp(0.0, MAX_DIAGNOSTIC_SCORE));
        }
    }

    pub fn get(&self, competency_id: &str) -> Option<f64> {
        self.0.get(competency_id).copied()
    }

    /// Score for a competency, or `default` when none was recorded.
    pub fn score_or(&self, competency_id: &str, default: f64) -> f64 {
        self.get(competency_id).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for DiagnosticScoreMap {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (id, score) in iter {
            map.insert(id, score);
        }
        map
    }
}

impl From<HashMap<String, f64>> for DiagnosticScoreMap {
    fn from(raw: HashMap<String, f64>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<DiagnosticScoreMap> for HashMap<String, f64> {
    fn from(map: DiagnosticScoreMap) -> Self {
        map.0
    }
}
