//! Property-based tests for sequencing, banding, and progress.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use pathway_core::config::PlanningConfig;
use pathway_core::models::{Competency, DiagnosticScoreMap, LearningPath, Step, StepKind, StepStatus};
use pathway_planning::progress;
use pathway_planning::{CompetencySequencer, StepPlanner};
use proptest::prelude::*;

/// Competencies `c0..cN` where each may require any lower-numbered one.
fn dag_course() -> impl Strategy<Value = (Vec<Competency>, Vec<f64>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(any::<bool>(), n), n),
            prop::collection::vec(0.0f64..=100.0, n),
        )
            .prop_map(move |(edges, scores)| {
                let competencies = (0..n)
                    .map(|i| {
                        let prerequisites = (0..i).filter(|&j| edges[i][j]).map(|j| format!("c{j}"));
                        Competency::new(format!("c{i}"), "course", format!("C{i}"))
                            .with_prerequisites(prerequisites)
                    })
                    .collect();
                (competencies, scores)
            })
    })
}

/// Competencies with arbitrary prerequisite edges, cycles included.
fn any_graph_course() -> impl Strategy<Value = Vec<Competency>> {
    (1usize..10).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), n), n).prop_map(move |edges| {
            (0..n)
                .map(|i| {
                    let prerequisites = (0..n).filter(|&j| edges[i][j]).map(|j| format!("c{j}"));
                    Competency::new(format!("c{i}"), "course", format!("C{i}"))
                        .with_prerequisites(prerequisites)
                })
                .collect()
        })
    })
}

fn score_map(competencies: &[Competency], scores: &[f64]) -> DiagnosticScoreMap {
    competencies
        .iter()
        .zip(scores)
        .map(|(c, s)| (c.id.clone(), *s))
        .collect()
}

proptest! {
    #[test]
    fn sequence_is_permutation_respecting_prerequisites((competencies, scores) in dag_course()) {
        let sequencer = CompetencySequencer::new(20.0);
        let sequence = sequencer.sequence(&competencies, &score_map(&competencies, &scores));

        let ids = sequence.ids();
        prop_assert_eq!(ids.len(), competencies.len());
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), competencies.len());
        prop_assert_eq!(sequence.forced().count(), 0);

        let position: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        for competency in &competencies {
            for prerequisite in &competency.prerequisites {
                prop_assert!(position[prerequisite.as_str()] < position[competency.id.as_str()]);
            }
        }
    }

    #[test]
    fn sequencing_terminates_on_cycles(competencies in any_graph_course()) {
        let sequence = CompetencySequencer::new(20.0).sequence(&competencies, &DiagnosticScoreMap::new());
        prop_assert_eq!(sequence.len(), competencies.len());
        if sequence.report.cycles.is_empty() {
            prop_assert_eq!(sequence.forced().count(), 0);
        }
    }

    #[test]
    fn lower_scores_never_get_fewer_steps(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let planner = StepPlanner::from_config(&PlanningConfig::default());
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(planner.steps_for(low) >= planner.steps_for(high));
        prop_assert!((1..=4).contains(&planner.steps_for(low)));
    }

    #[test]
    fn completion_never_decreases(
        n in 1u32..15,
        moves in prop::collection::vec((0u32..15, prop::sample::select(vec![
            StepStatus::InProgress,
            StepStatus::Completed,
            StepStatus::Skipped,
        ])), 0..40),
    ) {
        let now = Utc::now();
        let mut path = LearningPath::new("l", "course", "P", now);
        path.steps = (1..=n)
            .map(|o| Step::pending(o, format!("r{o}"), "c0", format!("C0 - Step {o}"), StepKind::Core, 30, 1))
            .collect();
        path.total_steps = n;

        let mut last = 0.0;
        for (order, target) in moves {
            if progress::transition(&mut path, order % n + 1, target, now).is_ok() {
                prop_assert!(path.completion_percentage >= last);
                prop_assert!(path.completion_percentage <= 100.0);
                last = path.completion_percentage;
            }
        }

        for order in 1..=n {
            let _ = progress::transition(&mut path, order, StepStatus::Completed, now);
        }
        let skipped = path.steps.iter().any(|s| s.status == StepStatus::Skipped);
        prop_assert_eq!(path.current_step, n);
        prop_assert_eq!(path.is_completed, !skipped);
        if !skipped {
            prop_assert_eq!(path.completion_percentage, 100.0);
        }
    }
}
