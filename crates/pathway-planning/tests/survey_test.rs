//! Style survey recording through the engine.

mod common;

use std::collections::BTreeMap;

use pathway_core::config::{PathwayConfig, UnmappedPolicy};
use pathway_core::errors::{PathwayError, SurveyError};
use pathway_core::models::{LearningStyle, RawSurveyResponse, ResourceKind, SurveyAnswers};
use pathway_planning::PathEngine;
use pathway_style::{SurveyMapping, SurveyTranslator};

use common::{engine_for, seeded_store};

fn answers(codes: &[&str]) -> SurveyAnswers {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| (format!("q{}", i + 1), code.to_string()))
        .collect::<BTreeMap<_, _>>()
}

fn translator() -> SurveyTranslator {
    SurveyTranslator::new(SurveyMapping::from_json(&test_fixtures::survey_mapping_json()).unwrap())
}

#[test]
fn survey_is_write_once_unless_replaced() {
    let (engine, _store, _course) = engine_for("algebra");

    let first = engine
        .record_style_survey("learner-1", &answers(&["V", "V", "A", "K"]), false)
        .unwrap();
    assert_eq!(first.dominant, LearningStyle::Visual);
    assert_eq!(first.answered, 4);

    let err = engine
        .record_style_survey("learner-1", &answers(&["K", "K", "K", "K"]), false)
        .unwrap_err();
    assert!(matches!(err, PathwayError::ProfileAlreadyRecorded { .. }));

    let replaced = engine
        .record_style_survey("learner-1", &answers(&["K", "K", "K", "K"]), true)
        .unwrap();
    assert_eq!(replaced.dominant, LearningStyle::Kinesthetic);

    let insights = engine.style_insights("learner-1").unwrap().unwrap();
    assert_eq!(insights.dominant, LearningStyle::Kinesthetic);
    assert_eq!(insights.strengths, vec![LearningStyle::Kinesthetic]);
    assert_eq!(insights.recommended_kinds[0], ResourceKind::Simulation);
    assert_eq!(insights.preferences.description, "Kinesthetic learning");
}

#[test]
fn insights_absent_without_profile() {
    let (engine, _store, _course) = engine_for("algebra");
    assert!(engine.style_insights("nobody").unwrap().is_none());
}

#[test]
fn profile_recorded_before_generation_sets_path_style() {
    let (engine, _store, course) = engine_for("algebra");
    engine
        .record_style_survey("learner-1", &answers(&["A", "A", "R"]), false)
        .unwrap();

    let path = engine.generate_path("learner-1", &course.course_id).unwrap().path;
    assert_eq!(path.learning_style, Some(LearningStyle::Auditory));
}

#[test]
fn raw_survey_cases_match_golden_results() {
    let translator = translator();
    for (i, case) in test_fixtures::survey_cases().into_iter().enumerate() {
        let (engine, _store, _course) = engine_for("algebra");
        let learner = format!("survey-learner-{i}");
        let (profile, translation) = engine
            .record_raw_survey(&learner, &case.raw, &translator, false)
            .unwrap();

        assert_eq!(translation.answers, case.expected_answers, "{}", case.name);
        assert_eq!(translation.dropped, case.expected_dropped, "{}", case.name);
        assert_eq!(profile.dominant.as_str(), case.expected_dominant, "{}", case.name);
        assert_eq!(profile.answered, case.expected_answers.len(), "{}", case.name);
        assert_eq!(profile.dropped, case.expected_dropped.len(), "{}", case.name);
    }
}

#[test]
fn reject_policy_fails_on_untranslatable_answer() {
    let course = test_fixtures::load_course("algebra");
    let mut config = PathwayConfig::default();
    config.style.unmapped_policy = UnmappedPolicy::Reject;
    let engine = PathEngine::new(seeded_store(&course), config).unwrap();

    let case = test_fixtures::survey_cases()
        .into_iter()
        .find(|c| !c.expected_dropped.is_empty())
        .unwrap();
    let err = engine
        .record_raw_survey("learner-1", &case.raw, &translator(), false)
        .unwrap_err();
    match err {
        PathwayError::InvalidSurveyResponse(SurveyError::UnmappedChoice { question_id, .. }) => {
            assert_eq!(question_id, case.expected_dropped[0]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(engine.style_insights("learner-1").unwrap().is_none());
}

#[test]
fn reject_policy_fails_on_unknown_letter_code() {
    let course = test_fixtures::load_course("algebra");
    let mut config = PathwayConfig::default();
    config.style.unmapped_policy = UnmappedPolicy::Reject;
    let engine = PathEngine::new(seeded_store(&course), config).unwrap();

    let err = engine
        .record_style_survey("learner-1", &answers(&["V", "X"]), false)
        .unwrap_err();
    assert!(matches!(err, PathwayError::InvalidSurveyResponse(_)));
}

#[test]
fn reject_policy_names_questions_missing_from_the_mapping() {
    let course = test_fixtures::load_course("algebra");
    let mut config = PathwayConfig::default();
    config.style.unmapped_policy = UnmappedPolicy::Reject;
    let engine = PathEngine::new(seeded_store(&course), config).unwrap();

    let raw: RawSurveyResponse = [
        ("entry.1001".to_string(), "I look at a map or diagram.".to_string()),
        ("entry.9999".to_string(), "Read the manual.".to_string()),
    ]
    .into_iter()
    .collect();
    let err = engine
        .record_raw_survey("learner-1", &raw, &translator(), false)
        .unwrap_err();
    assert!(matches!(
        err,
        PathwayError::InvalidSurveyResponse(SurveyError::UnknownQuestion { ref question_id })
            if question_id == "entry.9999"
    ));
}

#[test]
fn count_policy_reports_unknown_questions_separately() {
    let (engine, _store, _course) = engine_for("algebra");
    let case = test_fixtures::survey_cases()
        .into_iter()
        .find(|c| !c.expected_dropped.is_empty())
        .unwrap();
    let (_, translation) = engine
        .record_raw_survey("learner-1", &case.raw, &translator(), false)
        .unwrap();
    assert_eq!(translation.unknown_questions, vec!["entry.9999".to_string()]);
    assert!(!translation.is_unknown_question("entry.1002"));
}
