use pathway_core::config::StyleConfig;
use pathway_core::models::{LearningStyle, Resource, ResourceKind, StyleVector};
use pathway_core::traits::SurveyIngestor;
use pathway_style::{compatibility, insights, StyleProfiler, SurveyMapping, SurveyTranslator};

#[test]
fn golden_survey_responses_translate_and_profile() {
    let mapping = SurveyMapping::from_json(&test_fixtures::survey_mapping_json()).unwrap();
    assert_eq!(mapping.question_count(), 4);
    let translator = SurveyTranslator::new(mapping);
    let profiler = StyleProfiler::default();

    for case in test_fixtures::survey_cases() {
        let translation = translator.translate(&case.raw);
        assert_eq!(translation.answers, case.expected_answers, "{}", case.name);
        assert_eq!(translation.dropped, case.expected_dropped, "{}", case.name);

        let profile = profiler.analyze(&translation.answers).unwrap();
        let expected: LearningStyle = case.expected_dominant.parse().unwrap();
        assert_eq!(profile.dominant, expected, "{}", case.name);
        assert_eq!(profile.answered, case.expected_answers.len(), "{}", case.name);
    }
}

#[test]
fn full_style_names_in_mapping_are_accepted() {
    let mapping = SurveyMapping::from_json(&test_fixtures::survey_mapping_json()).unwrap();
    assert_eq!(
        mapping.lookup("entry.1003", "lab work"),
        Some(LearningStyle::Kinesthetic)
    );
}

#[test]
fn kinesthetic_learner_prefers_simulation_over_reading() {
    let profile = StyleProfiler::default()
        .analyze(
            &[("1", "K"), ("2", "K"), ("3", "K"), ("4", "V")]
                .iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
        )
        .unwrap();

    let sim = Resource::new("sim", "c", "Sim", ResourceKind::Simulation);
    let text = Resource::new("txt", "c", "Text", ResourceKind::Reading);
    assert!(compatibility(Some(&profile), &sim) > compatibility(Some(&profile), &text));

    let summary = insights(&profile, &StyleConfig::default());
    assert_eq!(summary.dominant, LearningStyle::Kinesthetic);
    assert_eq!(summary.strengths, vec![LearningStyle::Kinesthetic]);
    assert!(summary.recommended_kinds.contains(&ResourceKind::Simulation));
}

#[test]
fn explicit_scores_override_kind_defaults() {
    let profile = StyleProfiler::default()
        .analyze(&[("1".to_string(), "R".to_string())].into_iter().collect())
        .unwrap();
    let video = Resource::new("v", "c", "Narrated text", ResourceKind::Video)
        .with_style_scores(StyleVector::new(0.0, 0.0, 1.0, 0.0));
    assert!((compatibility(Some(&profile), &video) - 1.0).abs() < 1e-9);

    let unrated = Resource::new("v2", "c", "Plain", ResourceKind::Video)
        .with_style_scores(StyleVector::default());
    assert!((compatibility(Some(&profile), &unrated) - 0.3).abs() < 1e-9);
}

#[test]
fn no_profile_is_neutral() {
    let r = Resource::new("g", "c", "Game", ResourceKind::Game);
    assert_eq!(compatibility(None, &r), 0.5);
}
