//! AdaptationController and the PlanMutator strategies it dispatches to.

mod challenge;
mod reinforcement;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use pathway_core::config::{AdaptationConfig, PlanningConfig};
use pathway_core::constants::MAX_APPENDED_STEPS;
use pathway_core::models::{
    Adaptation, Competency, DiagnosticScoreMap, LearningPath, Resource, Step, StepKind,
    StepStatus, StyleProfile,
};
use tracing::debug;

pub use challenge::ChallengeMutator;
pub use reinforcement::ReinforcementMutator;

use crate::progress;

/// Everything a mutator may look at. Mutators never touch storage.
pub struct MutationInput<'a> {
    pub path: &'a LearningPath,
    pub scores: &'a DiagnosticScoreMap,
    /// Active resources per competency id, for every competency in the path.
    pub candidates: &'a HashMap<String, Vec<Resource>>,
    pub profile: Option<&'a StyleProfile>,
    /// Score assumed for competencies without a diagnostic result.
    pub default_score: f64,
}

impl<'a> MutationInput<'a> {
    pub fn score(&self, competency_id: &str) -> f64 {
        self.scores.score_or(competency_id, self.default_score)
    }

    pub fn candidates_for(&self, competency_id: &str) -> &[Resource] {
        self.candidates
            .get(competency_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Competencies of the `window` most recently touched steps (completed
    /// or in progress), most recent first, without repeats.
    pub fn recent_competencies(&self, window: usize) -> Vec<&'a str> {
        let mut touched: Vec<&'a Step> = self
            .path
            .steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Completed | StepStatus::InProgress))
            .collect();
        touched.sort_by(|a, b| {
            let at = |s: &Step| s.completed_at.or(s.started_at);
            at(b).cmp(&at(a)).then(b.order.cmp(&a.order))
        });

        let mut competencies: Vec<&'a str> = Vec::new();
        for step in touched.into_iter().take(window) {
            if !competencies.contains(&step.competency_id.as_str()) {
                competencies.push(step.competency_id.as_str());
            }
        }
        competencies
    }

    /// Competency to fall back on when nothing was touched yet: the first
    /// pending step's, else the last step's.
    pub fn fallback_competency(&self) -> Option<&'a str> {
        let mut steps: Vec<&'a Step> = self.path.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
            .iter()
            .copied()
            .find(|s| s.status == StepStatus::Pending)
            .or_else(|| steps.last().copied())
            .map(|s| s.competency_id.as_str())
    }
}

/// A step a mutator wants appended.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDraft {
    pub resource: Resource,
    pub competency_id: String,
    pub kind: StepKind,
}

/// A pure plan mutation strategy.
pub trait PlanMutator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Steps to append, best first. May be empty.
    fn propose(&self, input: &MutationInput<'_>) -> Vec<StepDraft>;
}

/// Dispatches a resolved signal to its mutator and splices the proposal
/// into the path.
pub struct AdaptationController {
    reinforcement: Box<dyn PlanMutator>,
    challenge: Box<dyn PlanMutator>,
}

impl AdaptationController {
    pub fn new(config: &AdaptationConfig) -> Self {
        Self::with_mutators(
            Box::new(ReinforcementMutator::from_config(config)),
            Box::new(ChallengeMutator::from_config(config)),
        )
    }

    pub fn with_mutators(reinforcement: Box<dyn PlanMutator>, challenge: Box<dyn PlanMutator>) -> Self {
        Self {
            reinforcement,
            challenge,
        }
    }

    pub fn mutator_for(&self, adaptation: Adaptation) -> Option<&dyn PlanMutator> {
        match adaptation {
            Adaptation::Reinforce => Some(self.reinforcement.as_ref()),
            Adaptation::Challenge => Some(self.challenge.as_ref()),
            Adaptation::None => None,
        }
    }

    /// Run the mutator for `adaptation` against `input`.
    pub fn propose(&self, adaptation: Adaptation, input: &MutationInput<'_>) -> Vec<StepDraft> {
        let Some(mutator) = self.mutator_for(adaptation) else {
            return Vec::new();
        };
        let mut drafts = mutator.propose(input);
        drafts.truncate(MAX_APPENDED_STEPS);
        debug!(mutator = mutator.name(), proposed = drafts.len(), "plan mutation proposed");
        drafts
    }

    /// Append drafts after the last step, update totals, and recompute
    /// progress. Returns the new steps.
    pub fn apply(
        &self,
        path: &mut LearningPath,
        drafts: Vec<StepDraft>,
        competencies: &[Competency],
        planning: &PlanningConfig,
        now: DateTime<Utc>,
    ) -> Vec<Step> {
        let names: HashMap<&str, &str> = competencies
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();

        let mut order = path.last_order();
        let mut appended = Vec::with_capacity(drafts.len());
        for draft in drafts {
            order += 1;
            let name = names
                .get(draft.competency_id.as_str())
                .copied()
                .unwrap_or(draft.competency_id.as_str());
            let step = Step::pending(
                order,
                draft.resource.id.clone(),
                draft.competency_id.clone(),
                format!("{name} - Step {order}"),
                draft.kind,
                draft.resource.duration_minutes.unwrap_or(planning.default_step_minutes),
                draft.resource.points.unwrap_or(planning.default_step_points),
            );
            appended.push(step);
        }

        path.steps.extend(appended.iter().cloned());
        path.total_steps = path.steps.len() as u32;
        path.estimated_minutes = path.steps.iter().map(|s| s.estimated_minutes).sum();
        progress::recompute(path, now);
        appended
    }
}

/// Resources with their compatibility and whether the path already uses
/// them, best compatibility first (stable).
pub(crate) fn rank_candidates<'r>(
    candidates: &'r [Resource],
    profile: Option<&StyleProfile>,
    path: &LearningPath,
) -> Vec<(&'r Resource, f64, bool)> {
    let used = path.resource_ids();
    let mut ranked: Vec<(&Resource, f64, bool)> = candidates
        .iter()
        .map(|r| {
            (
                r,
                pathway_style::compatibility(profile, r),
                used.contains(r.id.as_str()),
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
