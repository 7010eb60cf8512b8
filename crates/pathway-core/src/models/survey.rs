use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Letter-coded survey answers: question id → style code (`V`, `A`, `R`, `K`).
pub type SurveyAnswers = BTreeMap<String, String>;

/// Raw answers as delivered by a form collaborator: question id → answer text.
pub type RawSurveyResponse = BTreeMap<String, String>;

/// Result of translating a raw form response into letter codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyTranslation {
    pub answers: SurveyAnswers,
    /// Question ids whose answers could not be translated.
    pub dropped: Vec<String>,
    /// The subset of `dropped` the mapping has no question for at all.
    #[serde(default)]
    pub unknown_questions: Vec<String>,
}

impl SurveyTranslation {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_unknown_question(&self, question_id: &str) -> bool {
        self.unknown_questions.iter().any(|q| q == question_id)
    }
}
