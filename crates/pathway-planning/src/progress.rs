//! PathProgressTracker: step transitions and completion bookkeeping.

use chrono::{DateTime, Utc};
use pathway_core::constants::COMPLETE_PERCENTAGE;
use pathway_core::errors::{PathwayError, PathwayResult};
use pathway_core::models::{LearningPath, Step, StepStatus};
use tracing::info;

/// Recompute `current_step` and `completion_percentage`; mark the path
/// completed the first time every step is done. Never un-completes.
pub fn recompute(path: &mut LearningPath, now: DateTime<Utc>) {
    path.current_step = leading_finished(path);
    path.completion_percentage = if path.total_steps == 0 {
        0.0
    } else {
        100.0 * path.completed_count() as f64 / f64::from(path.total_steps)
    };

    if !path.is_completed && path.completion_percentage >= COMPLETE_PERCENTAGE {
        path.is_completed = true;
        path.completed_at = Some(now);
        info!(path_id = %path.id, "learning path completed");
    }
}

/// Number of leading steps (by order) that are completed or skipped.
fn leading_finished(path: &LearningPath) -> u32 {
    let mut orders: Vec<(u32, StepStatus)> = path.steps.iter().map(|s| (s.order, s.status)).collect();
    orders.sort_by_key(|(order, _)| *order);
    orders
        .iter()
        .take_while(|(_, status)| status.is_terminal())
        .count() as u32
}

/// Move step `order` to `target`, stamping timestamps and recomputing progress.
///
/// Allowed moves: pending → in_progress | completed | skipped, and
/// in_progress → completed | skipped. Inactive paths accept no moves.
pub fn transition(
    path: &mut LearningPath,
    order: u32,
    target: StepStatus,
    now: DateTime<Utc>,
) -> PathwayResult<()> {
    if !path.is_active {
        return Err(PathwayError::PathClosed {
            path_id: path.id.clone(),
        });
    }
    let path_id = path.id.clone();
    let step = path
        .step_mut(order)
        .ok_or(PathwayError::StepNotFound { path_id, order })?;

    if !step.status.can_transition_to(target) {
        return Err(PathwayError::InvalidStepTransition {
            order,
            from: step.status,
            to: target,
        });
    }

    step.status = target;
    match target {
        StepStatus::InProgress => {
            step.started_at.get_or_insert(now);
        }
        StepStatus::Completed => {
            step.started_at.get_or_insert(now);
            step.completed_at = Some(now);
        }
        StepStatus::Skipped | StepStatus::Pending => {}
    }

    path.started_at.get_or_insert(now);
    recompute(path, now);
    Ok(())
}

/// The step the learner should work on next: order `current_step + 1`.
pub fn next_step(path: &LearningPath) -> Option<&Step> {
    path.step(path.current_step + 1)
}

#[cfg(test)]
mod tests {
    use pathway_core::models::StepKind;

    use super::*;

    fn path(n: u32) -> LearningPath {
        let mut path = LearningPath::new("l", "c", "P", Utc::now());
        path.steps = (1..=n)
            .map(|o| Step::pending(o, format!("r{o}"), "comp", format!("Comp - Step {o}"), StepKind::Core, 30, 1))
            .collect();
        path.total_steps = n;
        path
    }

    #[test]
    fn completing_all_steps_completes_the_path() {
        let mut p = path(2);
        let now = Utc::now();
        transition(&mut p, 1, StepStatus::Completed, now).unwrap();
        assert_eq!(p.completion_percentage, 50.0);
        assert_eq!(p.current_step, 1);
        assert!(!p.is_completed);

        transition(&mut p, 2, StepStatus::InProgress, now).unwrap();
        assert_eq!(p.steps[1].started_at, Some(now));
        transition(&mut p, 2, StepStatus::Completed, now).unwrap();
        assert_eq!(p.completion_percentage, 100.0);
        assert!(p.is_completed);
        assert_eq!(p.completed_at, Some(now));
        assert!(next_step(&p).is_none());
    }

    #[test]
    fn terminal_steps_reject_further_moves() {
        let mut p = path(1);
        let now = Utc::now();
        transition(&mut p, 1, StepStatus::Skipped, now).unwrap();
        let err = transition(&mut p, 1, StepStatus::Completed, now).unwrap_err();
        assert!(matches!(
            err,
            PathwayError::InvalidStepTransition {
                order: 1,
                from: StepStatus::Skipped,
                to: StepStatus::Completed
            }
        ));
        assert!(matches!(
            transition(&mut p, 1, StepStatus::Pending, now).unwrap_err(),
            PathwayError::InvalidStepTransition { .. }
        ));
    }

    #[test]
    fn skipped_steps_advance_current_step_but_not_percentage() {
        let mut p = path(3);
        let now = Utc::now();
        transition(&mut p, 1, StepStatus::Skipped, now).unwrap();
        transition(&mut p, 3, StepStatus::Completed, now).unwrap();
        assert_eq!(p.current_step, 1);
        assert_eq!(next_step(&p).map(|s| s.order), Some(2));
        assert!((p.completion_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_step_and_inactive_path() {
        let mut p = path(1);
        assert!(matches!(
            transition(&mut p, 7, StepStatus::Completed, Utc::now()).unwrap_err(),
            PathwayError::StepNotFound { order: 7, .. }
        ));
        p.is_active = false;
        assert!(matches!(
            transition(&mut p, 1, StepStatus::Completed, Utc::now()).unwrap_err(),
            PathwayError::PathClosed { .. }
        ));
    }

    #[test]
    fn empty_path_is_zero_percent_and_never_completes() {
        let mut p = path(0);
        recompute(&mut p, Utc::now());
        assert_eq!(p.completion_percentage, 0.0);
        assert!(!p.is_completed);
    }

    #[test]
    fn completion_is_sticky() {
        let mut p = path(1);
        transition(&mut p, 1, StepStatus::Completed, Utc::now()).unwrap();
        let completed_at = p.completed_at;
        p.total_steps = 2;
        recompute(&mut p, Utc::now());
        assert!(p.is_completed);
        assert_eq!(p.completed_at, completed_at);
    }
}
