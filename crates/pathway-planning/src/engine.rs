//! PathEngine: the operations a host calls. Orchestrates sequencing,
//! planning, selection, progress, and adaptation over injected storage.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use pathway_core::config::{PathwayConfig, UnmappedPolicy};
use pathway_core::errors::{PathwayError, PathwayResult, SurveyError};
use pathway_core::models::{
    LearningPath, PerformanceSignal, RawSurveyResponse, Step, StepKind, StepStatus, StyleProfile,
    SurveyAnswers, SurveyTranslation,
};
use pathway_core::traits::{PathwayStorage, SurveyIngestor};
use pathway_observability::{adaptation_span, generation_span, profiling_span, progress_span};
use pathway_style::{insights, StyleInsights, StyleProfiler};
use tracing::{debug, info, warn};

use crate::adaptation::{AdaptationController, MutationInput};
use crate::outcome::{AdaptationOutcome, GenerationOutcome, PlanningWarning};
use crate::progress;
use crate::selector::ResourceSelector;
use crate::sequencer::CompetencySequencer;
use crate::step_planner::StepPlanner;

pub struct PathEngine {
    storage: Arc<dyn PathwayStorage>,
    config: PathwayConfig,
    sequencer: CompetencySequencer,
    planner: StepPlanner,
    selector: ResourceSelector,
    profiler: StyleProfiler,
    adaptation: AdaptationController,
}

impl PathEngine {
    /// Build an engine over `storage`. The config is validated here as well
    /// as at load time, since hosts may assemble it in code.
    pub fn new(storage: Arc<dyn PathwayStorage>, config: PathwayConfig) -> PathwayResult<Self> {
        config.validate()?;
        Ok(Self {
            sequencer: CompetencySequencer::from_config(&config.planning),
            planner: StepPlanner::from_config(&config.planning),
            selector: ResourceSelector::new(),
            profiler: StyleProfiler::from_config(&config.style),
            adaptation: AdaptationController::new(&config.adaptation),
            storage,
            config,
        })
    }

    /// Replace the default reinforcement/challenge strategies.
    pub fn with_adaptation(mut self, adaptation: AdaptationController) -> Self {
        self.adaptation = adaptation;
        self
    }

    pub fn config(&self) -> &PathwayConfig {
        &self.config
    }

    // ── Generation ─────────────────────────────────────────────────────────

    pub fn generate_path(&self, learner_id: &str, course_id: &str) -> PathwayResult<GenerationOutcome> {
        self.generate_path_at(learner_id, course_id, Utc::now())
    }

    /// Return the learner's active path for the course, or build and persist
    /// a new one. The new path is written in one transaction; if another
    /// generation wins the race, its path is returned instead.
    pub fn generate_path_at(
        &self,
        learner_id: &str,
        course_id: &str,
        now: DateTime<Utc>,
    ) -> PathwayResult<GenerationOutcome> {
        let _span = generation_span!(learner_id, course_id).entered();

        if let Some(path) = self.storage.find_active_path(learner_id, course_id)? {
            debug!(path_id = %path.id, "active path already exists");
            return Ok(GenerationOutcome {
                path,
                created: false,
                warnings: Vec::new(),
            });
        }

        let competencies = self.storage.list(course_id)?;
        if competencies.is_empty() {
            return Err(PathwayError::not_found("course", course_id));
        }
        let scores = self.storage.get_scores(learner_id, course_id)?;
        let profile = self.storage.get_profile(learner_id)?;

        let sequence = self.sequencer.sequence(&competencies, &scores);
        let mut warnings: Vec<PlanningWarning> = sequence
            .forced()
            .map(|e| PlanningWarning::ForcedPrerequisite {
                competency_id: e.competency.id.clone(),
            })
            .collect();

        let mut path = LearningPath::new(
            learner_id,
            course_id,
            format!("Learning path for {course_id}"),
            now,
        );
        path.learning_style = profile.as_ref().map(|p| p.dominant);

        let planning = &self.config.planning;
        for entry in &sequence.entries {
            let competency = &entry.competency;
            let wanted = self.planner.steps_for(entry.score);
            let candidates = self.storage.get_active(&competency.id)?;
            let selection = self.selector.select(candidates, profile.as_ref(), wanted);
            debug!(
                competency_id = %competency.id,
                score = entry.score,
                wanted,
                selected = selection.resources.len(),
                "planned competency"
            );

            if selection.is_empty() {
                warn!(competency_id = %competency.id, "no active resources");
                warnings.push(PlanningWarning::EmptyCandidatePool {
                    competency_id: competency.id.clone(),
                });
                continue;
            }
            if selection.shortfall > 0 {
                warn!(
                    competency_id = %competency.id,
                    wanted,
                    available = selection.resources.len(),
                    "thin resource pool"
                );
                warnings.push(PlanningWarning::ThinCandidatePool {
                    competency_id: competency.id.clone(),
                    requested: wanted,
                    available: selection.resources.len(),
                });
            }

            for (i, resource) in selection.resources.iter().enumerate() {
                let order = path.steps.len() as u32 + 1;
                path.steps.push(Step::pending(
                    order,
                    resource.id.clone(),
                    competency.id.clone(),
                    format!("{} - Step {}", competency.name, i + 1),
                    StepKind::Core,
                    resource.duration_minutes.unwrap_or(planning.default_step_minutes),
                    resource.points.unwrap_or(planning.default_step_points),
                ));
            }
        }

        path.total_steps = path.steps.len() as u32;
        path.estimated_minutes = path.steps.iter().map(|s| s.estimated_minutes).sum();
        path.started_at = Some(now);

        match self.storage.create_path(&path) {
            Ok(()) => {
                info!(
                    path_id = %path.id,
                    steps = path.total_steps,
                    warnings = warnings.len(),
                    "learning path created"
                );
                Ok(GenerationOutcome {
                    path,
                    created: true,
                    warnings,
                })
            }
            Err(PathwayError::DuplicateActivePath { .. }) => {
                let winner = self
                    .storage
                    .find_active_path(learner_id, course_id)?
                    .ok_or_else(|| PathwayError::not_found("active learning path", learner_id))?;
                debug!(path_id = %winner.id, "concurrent generation won");
                Ok(GenerationOutcome {
                    path: winner,
                    created: false,
                    warnings: Vec::new(),
                })
            }
            Err(e) => Err(e),
        }
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    pub fn get_path(&self, path_id: &str) -> PathwayResult<LearningPath> {
        self.storage
            .get_path(path_id)?
            .ok_or_else(|| PathwayError::not_found("learning path", path_id))
    }

    pub fn active_path(&self, learner_id: &str, course_id: &str) -> PathwayResult<Option<LearningPath>> {
        self.storage.find_active_path(learner_id, course_id)
    }

    pub fn next_step(&self, path_id: &str) -> PathwayResult<Option<Step>> {
        let path = self.get_path(path_id)?;
        Ok(progress::next_step(&path).cloned())
    }

    // ── Progress ───────────────────────────────────────────────────────────

    pub fn start_step(&self, path_id: &str, order: u32) -> PathwayResult<LearningPath> {
        self.transition_step(path_id, order, StepStatus::InProgress, Utc::now())
    }

    pub fn complete_step(&self, path_id: &str, order: u32) -> PathwayResult<LearningPath> {
        self.transition_step(path_id, order, StepStatus::Completed, Utc::now())
    }

    pub fn skip_step(&self, path_id: &str, order: u32) -> PathwayResult<LearningPath> {
        self.transition_step(path_id, order, StepStatus::Skipped, Utc::now())
    }

    /// Apply a step transition and persist the step with the path's progress.
    pub fn transition_step(
        &self,
        path_id: &str,
        order: u32,
        target: StepStatus,
        now: DateTime<Utc>,
    ) -> PathwayResult<LearningPath> {
        let _span = progress_span!(path_id, order).entered();
        let mut path = self.get_path(path_id)?;
        progress::transition(&mut path, order, target, now)?;
        self.storage.save_step_transition(&path, order)?;
        debug!(
            status = %target,
            completion = path.completion_percentage,
            current_step = path.current_step,
            "step updated"
        );
        Ok(path)
    }

    // ── Adaptation ─────────────────────────────────────────────────────────

    pub fn adapt_path(&self, path_id: &str, signal: PerformanceSignal) -> PathwayResult<AdaptationOutcome> {
        self.adapt_path_at(path_id, signal, Utc::now())
    }

    /// Resolve the signal, let the matching mutator propose steps, and
    /// persist them with the path's new totals in one transaction.
    pub fn adapt_path_at(
        &self,
        path_id: &str,
        signal: PerformanceSignal,
        now: DateTime<Utc>,
    ) -> PathwayResult<AdaptationOutcome> {
        let adaptation = signal.resolve()?;
        let _span = adaptation_span!(path_id, adaptation).entered();

        let mut path = self.get_path(path_id)?;
        if !path.is_open() {
            return Err(PathwayError::PathClosed {
                path_id: path.id.clone(),
            });
        }
        if self.adaptation.mutator_for(adaptation).is_none() {
            return Ok(AdaptationOutcome {
                adaptation,
                path,
                appended: Vec::new(),
            });
        }

        let scores = self.storage.get_scores(&path.learner_id, &path.course_id)?;
        let profile = self.storage.get_profile(&path.learner_id)?;
        let competencies = self.storage.list(&path.course_id)?;
        let mut candidates = HashMap::new();
        for competency_id in path.competency_order() {
            candidates.insert(competency_id.to_string(), self.storage.get_active(competency_id)?);
        }

        let drafts = {
            let input = MutationInput {
                path: &path,
                scores: &scores,
                candidates: &candidates,
                profile: profile.as_ref(),
                default_score: self.config.planning.default_diagnostic_score,
            };
            self.adaptation.propose(adaptation, &input)
        };
        if drafts.is_empty() {
            info!("no resources available to adapt the path");
            return Ok(AdaptationOutcome {
                adaptation,
                path,
                appended: Vec::new(),
            });
        }

        let appended = self
            .adaptation
            .apply(&mut path, drafts, &competencies, &self.config.planning, now);
        self.storage.append_steps(&path, &appended)?;
        info!(appended = appended.len(), total_steps = path.total_steps, "learning path adapted");

        Ok(AdaptationOutcome {
            adaptation,
            path,
            appended,
        })
    }

    pub fn deactivate_path(&self, path_id: &str) -> PathwayResult<()> {
        self.storage.deactivate_path(path_id)?;
        info!(path_id, "learning path deactivated");
        Ok(())
    }

    // ── Style profiles ─────────────────────────────────────────────────────

    /// Score letter-coded answers and store the profile. A second recording
    /// fails with `ProfileAlreadyRecorded` unless `replace` is set.
    pub fn record_style_survey(
        &self,
        learner_id: &str,
        answers: &SurveyAnswers,
        replace: bool,
    ) -> PathwayResult<StyleProfile> {
        let _span = profiling_span!(learner_id).entered();
        let profile = self.profiler.analyze(answers)?;
        self.storage.save_profile(learner_id, &profile, replace)?;
        info!(dominant = %profile.dominant, answered = profile.answered, "style profile recorded");
        Ok(profile)
    }

    /// Translate a raw form submission, then record it. Untranslatable
    /// answers count as dropped, or fail the call under the `reject` policy
    /// (`UnknownQuestion` for ids the mapping lacks, `UnmappedChoice` for
    /// unrecognized answer text).
    pub fn record_raw_survey(
        &self,
        learner_id: &str,
        raw: &RawSurveyResponse,
        ingestor: &dyn SurveyIngestor,
        replace: bool,
    ) -> PathwayResult<(StyleProfile, SurveyTranslation)> {
        let translation = ingestor.translate(raw);
        if self.config.style.unmapped_policy == UnmappedPolicy::Reject {
            if let Some(question_id) = translation.dropped.first() {
                let question_id = question_id.clone();
                let err = if translation.is_unknown_question(&question_id) {
                    SurveyError::UnknownQuestion { question_id }
                } else {
                    let choice = raw.get(&question_id).cloned().unwrap_or_default();
                    SurveyError::UnmappedChoice { question_id, choice }
                };
                return Err(err.into());
            }
        }

        let _span = profiling_span!(learner_id).entered();
        let mut profile = self.profiler.analyze(&translation.answers)?;
        profile.dropped += translation.dropped_count();
        self.storage.save_profile(learner_id, &profile, replace)?;
        info!(
            dominant = %profile.dominant,
            answered = profile.answered,
            dropped = profile.dropped,
            "style profile recorded from raw survey"
        );
        Ok((profile, translation))
    }

    pub fn style_insights(&self, learner_id: &str) -> PathwayResult<Option<StyleInsights>> {
        Ok(self
            .storage
            .get_profile(learner_id)?
            .map(|profile| insights(&profile, &self.config.style)))
    }
}
