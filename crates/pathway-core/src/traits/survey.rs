use crate::models::{RawSurveyResponse, SurveyTranslation};

/// Translates form answers into letter-coded survey answers.
pub trait SurveyIngestor: Send + Sync {
    fn translate(&self, raw: &RawSurveyResponse) -> SurveyTranslation;
}
