//! Translation of free-text form answers into letter-coded survey answers.

use std::collections::BTreeMap;

use pathway_core::errors::{PathwayResult, SurveyError};
use pathway_core::models::{LearningStyle, RawSurveyResponse, SurveyAnswers, SurveyTranslation};
use pathway_core::traits::SurveyIngestor;
use tracing::{debug, warn};

/// Question id → normalized answer text → style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyMapping {
    questions: BTreeMap<String, BTreeMap<String, LearningStyle>>,
}

impl SurveyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON shaped as `{ "question id": { "answer text": "V" } }`.
    /// Styles may be letter codes or full names.
    pub fn from_json(json: &str) -> PathwayResult<Self> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut mapping = Self::new();
        for (question_id, answers) in raw {
            for (text, code) in answers {
                let style = code.parse::<LearningStyle>().map_err(|_| {
                    SurveyError::UnmappedChoice {
                        question_id: question_id.clone(),
                        choice: code.clone(),
                    }
                })?;
                mapping.insert(&question_id, &text, style);
            }
        }
        Ok(mapping)
    }

    pub fn insert(&mut self, question_id: &str, answer_text: &str, style: LearningStyle) {
        self.questions
            .entry(question_id.to_string())
            .or_default()
            .insert(normalize_answer(answer_text), style);
    }

    /// Builder-style helper for one question's answers.
    pub fn with_question<'a, I>(mut self, question_id: &str, answers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, LearningStyle)>,
    {
        for (text, style) in answers {
            self.insert(question_id, text, style);
        }
        self
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn lookup(&self, question_id: &str, answer_text: &str) -> Option<LearningStyle> {
        self.questions
            .get(question_id)?
            .get(&normalize_answer(answer_text))
            .copied()
    }

    pub fn knows_question(&self, question_id: &str) -> bool {
        self.questions.contains_key(question_id)
    }
}

/// Trim, case-fold, collapse whitespace, and drop trailing periods.
fn normalize_answer(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('.').to_lowercase()
}

/// [`SurveyIngestor`] backed by a [`SurveyMapping`].
#[derive(Debug, Clone)]
pub struct SurveyTranslator {
    mapping: SurveyMapping,
}

impl SurveyTranslator {
    pub fn new(mapping: SurveyMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &SurveyMapping {
        &self.mapping
    }
}

impl SurveyIngestor for SurveyTranslator {
    fn translate(&self, raw: &RawSurveyResponse) -> SurveyTranslation {
        let mut answers = SurveyAnswers::new();
        let mut dropped = Vec::new();
        let mut unknown_questions = Vec::new();

        for (question_id, text) in raw {
            match self.mapping.lookup(question_id, text) {
                Some(style) => {
                    answers.insert(question_id.clone(), style.code().to_string());
                }
                None => {
                    if self.mapping.knows_question(question_id) {
                        debug!(question_id = %question_id, answer = %text, "answer text not in mapping");
                    } else {
                        debug!(question_id = %question_id, "question not in mapping");
                        unknown_questions.push(question_id.clone());
                    }
                    dropped.push(question_id.clone());
                }
            }
        }

        if !dropped.is_empty() {
            warn!(
                dropped = dropped.len(),
                translated = answers.len(),
                "survey response had untranslatable answers"
            );
        }

        SurveyTranslation {
            answers,
            dropped,
            unknown_questions,
        }
    }
}
