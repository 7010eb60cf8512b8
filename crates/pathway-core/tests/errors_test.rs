use pathway_core::errors::*;
use pathway_core::models::StepStatus;

#[test]
fn not_found_carries_entity_and_id() {
    let err = PathwayError::not_found("course", "algebra-1");
    let msg = err.to_string();
    assert!(msg.contains("course"));
    assert!(msg.contains("algebra-1"));
}

#[test]
fn duplicate_active_path_carries_learner_and_course() {
    let err = PathwayError::DuplicateActivePath {
        learner_id: "learner-7".into(),
        course_id: "geometry".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("learner-7"));
    assert!(msg.contains("geometry"));
}

#[test]
fn invalid_transition_names_both_states() {
    let err = PathwayError::InvalidStepTransition {
        order: 3,
        from: StepStatus::Completed,
        to: StepStatus::InProgress,
    };
    let msg = err.to_string();
    assert!(msg.contains("completed"));
    assert!(msg.contains("in_progress"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_pathway_error() {
    let storage_err = StorageError::Sqlite {
        message: "disk full".into(),
    };
    let err: PathwayError = storage_err.into();
    assert!(matches!(err, PathwayError::Storage(_)));
    assert!(!err.is_caller_error());
}

#[test]
fn survey_error_converts_to_invalid_survey_response() {
    let survey_err = SurveyError::UnmappedChoice {
        question_id: "q4".into(),
        choice: "Z".into(),
    };
    let err: PathwayError = survey_err.into();
    assert!(matches!(err, PathwayError::InvalidSurveyResponse(_)));
    assert!(err.to_string().contains("q4"));
    assert!(err.is_caller_error());
}

#[test]
fn config_error_converts_to_pathway_error() {
    let config_err = ConfigError::ValidationFailed {
        field: "planning.bands".into(),
        message: "bad".into(),
    };
    let err: PathwayError = config_err.into();
    assert!(matches!(err, PathwayError::Config(_)));
}

#[test]
fn serde_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: PathwayError = json_err.into();
    assert!(matches!(err, PathwayError::Serialization(_)));
}
