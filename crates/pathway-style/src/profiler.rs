//! Survey answers → normalized style percentages.

use chrono::{DateTime, Utc};
use pathway_core::config::{StyleConfig, UnmappedPolicy};
use pathway_core::constants::NEUTRAL_STYLE_PERCENTAGE;
use pathway_core::errors::{PathwayResult, SurveyError};
use pathway_core::models::{LearningStyle, StyleProfile, StyleVector, SurveyAnswers};
use tracing::{debug, warn};

use crate::dominance::dominant_style;

/// Scores VARK survey answers.
#[derive(Debug, Clone, Default)]
pub struct StyleProfiler {
    policy: UnmappedPolicy,
}

impl StyleProfiler {
    pub fn new(policy: UnmappedPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &StyleConfig) -> Self {
        Self::new(config.unmapped_policy)
    }

    /// Analyze answers, stamping the profile with the current time.
    pub fn analyze(&self, answers: &SurveyAnswers) -> PathwayResult<StyleProfile> {
        self.analyze_at(answers, Utc::now())
    }

    /// Each recognized choice counts once for its style; percentages are
    /// `count / answered * 100` where `answered` excludes dropped choices.
    /// With nothing answered the profile is neutral (25% each).
    pub fn analyze_at(
        &self,
        answers: &SurveyAnswers,
        now: DateTime<Utc>,
    ) -> PathwayResult<StyleProfile> {
        let mut counts = StyleVector::default();
        let mut answered = 0usize;
        let mut dropped = 0usize;

        for (question_id, choice) in answers {
            match choice.parse::<LearningStyle>() {
                Ok(style) => {
                    *counts.get_mut(style) += 1.0;
                    answered += 1;
                }
                Err(_) => match self.policy {
                    UnmappedPolicy::Reject => {
                        return Err(SurveyError::UnmappedChoice {
                            question_id: question_id.clone(),
                            choice: choice.clone(),
                        }
                        .into());
                    }
                    UnmappedPolicy::Count => {
                        debug!(question_id = %question_id, choice = %choice, "dropping unmapped survey choice");
                        dropped += 1;
                    }
                },
            }
        }

        if dropped > 0 {
            warn!(dropped, answered, "survey answers left out of style normalization");
        }

        let scores = if answered == 0 {
            StyleVector::uniform(NEUTRAL_STYLE_PERCENTAGE)
        } else {
            counts.scaled(100.0 / answered as f64)
        };

        Ok(StyleProfile {
            dominant: dominant_style(&scores),
            scores,
            answered,
            dropped,
            recorded_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use pathway_core::PathwayError;

    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> SurveyAnswers {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect()
    }

    #[test]
    fn one_of_each_is_balanced_and_visual() {
        let profile = StyleProfiler::default()
            .analyze(&answers(&[("1", "V"), ("2", "A"), ("3", "R"), ("4", "K")]))
            .unwrap();
        assert_eq!(profile.scores, StyleVector::uniform(25.0));
        assert_eq!(profile.dominant, LearningStyle::Visual);
        assert_eq!(profile.answered, 4);
    }

    #[test]
    fn empty_survey_is_neutral() {
        let profile = StyleProfiler::default().analyze(&SurveyAnswers::new()).unwrap();
        assert_eq!(profile.scores, StyleVector::uniform(25.0));
        assert_eq!(profile.answered, 0);
    }

    #[test]
    fn unmapped_choices_are_counted_not_normalized() {
        let profile = StyleProfiler::default()
            .analyze(&answers(&[("1", "K"), ("2", "K"), ("3", "Z"), ("4", "A")]))
            .unwrap();
        assert_eq!(profile.dropped, 1);
        assert_eq!(profile.answered, 3);
        assert!((profile.scores.sum() - 100.0).abs() < 1e-9);
        assert_eq!(profile.dominant, LearningStyle::Kinesthetic);
    }

    #[test]
    fn reject_policy_fails_on_unmapped_choice() {
        let err = StyleProfiler::new(UnmappedPolicy::Reject)
            .analyze(&answers(&[("1", "V"), ("7", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, PathwayError::InvalidSurveyResponse(_)));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn codes_are_case_insensitive() {
        let profile = StyleProfiler::default()
            .analyze(&answers(&[("1", "r"), ("2", " r ")]))
            .unwrap();
        assert_eq!(profile.scores.reading, 100.0);
    }
}
