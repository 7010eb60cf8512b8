use pathway_core::config::AdaptationConfig;
use pathway_core::models::StepKind;

use super::{rank_candidates, MutationInput, PlanMutator, StepDraft};

/// Extra practice on the weakest competency the learner touched recently.
#[derive(Debug, Clone)]
pub struct ReinforcementMutator {
    recent_window: usize,
    steps: usize,
}

impl ReinforcementMutator {
    pub fn new(recent_window: usize, steps: usize) -> Self {
        Self {
            recent_window,
            steps,
        }
    }

    pub fn from_config(config: &AdaptationConfig) -> Self {
        Self::new(config.recent_window, config.reinforcement_steps)
    }

    /// Lowest-scoring recent competency; the first one wins ties.
    fn target<'a>(&self, input: &MutationInput<'a>) -> Option<&'a str> {
        input
            .recent_competencies(self.recent_window)
            .into_iter()
            .min_by(|a, b| input.score(a).total_cmp(&input.score(b)))
            .or_else(|| input.fallback_competency())
    }
}

impl PlanMutator for ReinforcementMutator {
    fn name(&self) -> &'static str {
        "reinforcement"
    }

    fn propose(&self, input: &MutationInput<'_>) -> Vec<StepDraft> {
        let Some(target) = self.target(input) else {
            return Vec::new();
        };

        let mut ranked = rank_candidates(input.candidates_for(target), input.profile, input.path);
        // Unused resources first; repeats only when the pool runs out.
        ranked.sort_by_key(|(_, _, used)| *used);

        ranked
            .into_iter()
            .take(self.steps)
            .map(|(resource, _, _)| StepDraft {
                resource: resource.clone(),
                competency_id: target.to_string(),
                kind: StepKind::Reinforcement,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{Duration, Utc};
    use pathway_core::models::{
        DiagnosticScoreMap, LearningPath, Resource, ResourceKind, Step, StepStatus,
    };

    use super::*;

    fn path() -> LearningPath {
        let now = Utc::now();
        let mut path = LearningPath::new("l", "c", "P", now);
        path.steps = vec![
            Step::pending(1, "a1", "a", "A - Step 1", StepKind::Core, 30, 1),
            Step::pending(2, "b1", "b", "B - Step 1", StepKind::Core, 30, 1),
            Step::pending(3, "c1", "c", "C - Step 1", StepKind::Core, 30, 1),
        ];
        path.steps[0].status = StepStatus::Completed;
        path.steps[0].completed_at = Some(now - Duration::minutes(10));
        path.steps[1].status = StepStatus::Completed;
        path.steps[1].completed_at = Some(now);
        path.total_steps = 3;
        path
    }

    fn candidates() -> HashMap<String, Vec<Resource>> {
        let mut map = HashMap::new();
        map.insert(
            "a".to_string(),
            vec![
                Resource::new("a1", "a", "Used", ResourceKind::Video),
                Resource::new("a2", "a", "Fresh", ResourceKind::Reading),
            ],
        );
        map.insert("b".to_string(), vec![Resource::new("b1", "b", "B", ResourceKind::Video)]);
        map.insert("c".to_string(), vec![Resource::new("c2", "c", "C", ResourceKind::Game)]);
        map
    }

    #[test]
    fn reinforces_weakest_recent_competency_with_unused_first() {
        let path = path();
        let candidates = candidates();
        let scores: DiagnosticScoreMap = [("a", 30.0), ("b", 70.0)].into_iter().collect();
        let input = MutationInput {
            path: &path,
            scores: &scores,
            candidates: &candidates,
            profile: None,
            default_score: 20.0,
        };

        let drafts = ReinforcementMutator::new(3, 2).propose(&input);
        let ids: Vec<&str> = drafts.iter().map(|d| d.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a1"]);
        assert!(drafts.iter().all(|d| d.kind == StepKind::Reinforcement && d.competency_id == "a"));
    }

    #[test]
    fn window_limits_what_counts_as_recent() {
        let path = path();
        let candidates = candidates();
        let scores: DiagnosticScoreMap = [("a", 30.0), ("b", 70.0)].into_iter().collect();
        let input = MutationInput {
            path: &path,
            scores: &scores,
            candidates: &candidates,
            profile: None,
            default_score: 20.0,
        };
        // Only step 2 (competency b) is within a window of one.
        let drafts = ReinforcementMutator::new(1, 1).propose(&input);
        assert_eq!(drafts[0].competency_id, "b");
    }

    #[test]
    fn untouched_path_falls_back_to_next_pending_step() {
        let mut path = path();
        for step in &mut path.steps {
            step.status = StepStatus::Pending;
            step.completed_at = None;
        }
        let candidates = candidates();
        let scores = DiagnosticScoreMap::new();
        let input = MutationInput {
            path: &path,
            scores: &scores,
            candidates: &candidates,
            profile: None,
            default_score: 20.0,
        };
        let drafts = ReinforcementMutator::new(3, 1).propose(&input);
        assert_eq!(drafts[0].competency_id, "a");
    }
}
