/// Survey answer errors, raised only when unmapped answers are rejected
/// rather than counted.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("question {question_id}: unrecognized choice {choice:?}")]
    UnmappedChoice { question_id: String, choice: String },

    #[error("question {question_id} is not part of the survey mapping")]
    UnknownQuestion { question_id: String },
}
