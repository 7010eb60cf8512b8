#![allow(dead_code)]

use std::sync::Arc;

use pathway_core::config::PathwayConfig;
use pathway_planning::PathEngine;
use pathway_storage::StorageEngine;
use test_fixtures::CourseFixture;

/// In-memory store seeded with a course fixture and all its diagnostics.
pub fn seeded_store(course: &CourseFixture) -> Arc<StorageEngine> {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    seed(&store, course);
    store
}

pub fn seed(store: &StorageEngine, course: &CourseFixture) {
    for competency in &course.competencies {
        store.upsert_competency(competency).unwrap();
    }
    for resource in &course.resources {
        store.upsert_resource(resource).unwrap();
    }
    for (learner_id, scores) in &course.diagnostics {
        for (competency_id, score) in scores.iter() {
            store
                .record_diagnostic(learner_id, &course.course_id, competency_id, score)
                .unwrap();
        }
    }
}

pub fn engine_for(course_name: &str) -> (PathEngine, Arc<StorageEngine>, CourseFixture) {
    pathway_observability::init_tracing_with_filter("warn");
    let course = test_fixtures::load_course(course_name);
    let store = seeded_store(&course);
    let engine = PathEngine::new(store.clone(), PathwayConfig::default()).unwrap();
    (engine, store, course)
}
