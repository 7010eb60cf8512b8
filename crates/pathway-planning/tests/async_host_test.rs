//! The engine is synchronous but must be callable from async hosts.

mod common;

use std::sync::Arc;

use common::engine_for;

#[tokio::test]
async fn generation_runs_on_a_runtime_thread() {
    let (engine, _store, course) = engine_for("algebra");
    let outcome = engine.generate_path("learner-1", &course.course_id).unwrap();
    assert!(outcome.created);

    let updated = engine.complete_step(&outcome.path.id, 1).unwrap();
    assert_eq!(updated.current_step, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_generations_share_one_path() {
    let (engine, _store, course) = engine_for("algebra");
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let course_id = course.course_id.clone();
            tokio::spawn(async move { engine.generate_path("learner-1", &course_id) })
        })
        .collect();

    let mut ids = Vec::new();
    let mut created = 0;
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        created += usize::from(outcome.created);
        ids.push(outcome.path.id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(created, 1);
}
