use pathway_core::config::AdaptationConfig;
use pathway_core::models::StepKind;

use super::{rank_candidates, MutationInput, PlanMutator, StepDraft};

/// New, hands-on material beyond the strongest competency the learner
/// touched recently.
#[derive(Debug, Clone)]
pub struct ChallengeMutator {
    recent_window: usize,
    steps: usize,
}

impl ChallengeMutator {
    pub fn new(recent_window: usize, steps: usize) -> Self {
        Self {
            recent_window,
            steps,
        }
    }

    pub fn from_config(config: &AdaptationConfig) -> Self {
        Self::new(config.recent_window, config.challenge_steps)
    }

    /// Highest-scoring recent competency; the first one wins ties.
    fn strongest<'a>(&self, input: &MutationInput<'a>) -> Option<&'a str> {
        input
            .recent_competencies(self.recent_window)
            .into_iter()
            .fold(None, |best: Option<&'a str>, id| match best {
                Some(b) if input.score(b) >= input.score(id) => Some(b),
                _ => Some(id),
            })
            .or_else(|| input.fallback_competency())
    }

    /// Competency scheduled after `id` in the path, if any.
    fn successor<'a>(input: &MutationInput<'a>, id: &str) -> Option<&'a str> {
        let order = input.path.competency_order();
        let position = order.iter().position(|c| *c == id)?;
        order.get(position + 1).copied()
    }

    fn drafts_for(&self, input: &MutationInput<'_>, competency_id: &str) -> Vec<StepDraft> {
        let mut fresh: Vec<_> = rank_candidates(input.candidates_for(competency_id), input.profile, input.path)
            .into_iter()
            .filter(|(_, _, used)| !used)
            .collect();
        fresh.sort_by_key(|(resource, _, _)| !resource.kind.is_hands_on());

        fresh
            .into_iter()
            .take(self.steps)
            .map(|(resource, _, _)| StepDraft {
                resource: resource.clone(),
                competency_id: competency_id.to_string(),
                kind: StepKind::Challenge,
            })
            .collect()
    }
}

impl PlanMutator for ChallengeMutator {
    fn name(&self) -> &'static str {
        "challenge"
    }

    /// Targets the strongest competency's successor; falls back to the
    /// strongest itself when there is no successor or it has nothing new.
    fn propose(&self, input: &MutationInput<'_>) -> Vec<StepDraft> {
        let Some(strongest) = self.strongest(input) else {
            return Vec::new();
        };
        if let Some(next) = Self::successor(input, strongest) {
            let drafts = self.drafts_for(input, next);
            if !drafts.is_empty() {
                return drafts;
            }
        }
        self.drafts_for(input, strongest)
    }
}
