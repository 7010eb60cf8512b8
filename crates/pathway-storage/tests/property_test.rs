use chrono::Utc;
use pathway_core::models::{Competency, LearningPath, Resource, ResourceKind, Step, StepKind};
use pathway_core::traits::{DiagnosticScoreProvider, PathStore};
use pathway_storage::StorageEngine;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_diagnostics_are_within_range(score in -500.0f64..500.0) {
        let engine = StorageEngine::open_in_memory().unwrap();
        engine.record_diagnostic("l", "course", "c", score).unwrap();
        let stored = engine.get_scores("l", "course").unwrap().get("c").unwrap();
        prop_assert!((0.0..=100.0).contains(&stored));
        if (0.0..=100.0).contains(&score) {
            prop_assert_eq!(stored, score);
        }
    }

    #[test]
    fn paths_roundtrip_any_step_count(count in 0usize..25, minutes in 1u32..120) {
        let engine = StorageEngine::open_in_memory().unwrap();
        engine.upsert_competency(&Competency::new("c", "course", "C")).unwrap();
        engine.upsert_resource(&Resource::new("r", "c", "R", ResourceKind::Exercise)).unwrap();

        let mut path = LearningPath::new("l", "course", "P", Utc::now());
        path.steps = (1..=count as u32)
            .map(|order| Step::pending(order, "r", "c", format!("C - Step {order}"), StepKind::Core, minutes, 1))
            .collect();
        path.total_steps = count as u32;
        path.estimated_minutes = minutes * count as u32;
        engine.create_path(&path).unwrap();

        let loaded = engine.get_path(&path.id).unwrap().unwrap();
        prop_assert_eq!(loaded.steps.len(), count);
        prop_assert_eq!(loaded.estimated_minutes, path.estimated_minutes);
        let orders: Vec<u32> = loaded.steps.iter().map(|s| s.order).collect();
        prop_assert_eq!(orders, (1..=count as u32).collect::<Vec<_>>());
    }
}
