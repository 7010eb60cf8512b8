//! CompetencySequencer: weakest competencies first, prerequisites respected
//! wherever the graph allows it.

use std::collections::HashSet;

use pathway_core::config::PlanningConfig;
use pathway_core::models::{Competency, DiagnosticScoreMap};
use serde::Serialize;
use tracing::{debug, warn};

use crate::prerequisite_graph::{self, GraphReport};

/// One competency in sequenced order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencedCompetency {
    pub competency: Competency,
    /// Diagnostic score used for ordering (default applied when missing).
    pub score: f64,
    /// Placed before all of its prerequisites were: a cycle, or a
    /// prerequisite outside the course.
    pub forced: bool,
}

/// Ordered competencies of a course for one learner.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sequence {
    pub entries: Vec<SequencedCompetency>,
    #[serde(skip)]
    pub report: GraphReport,
}

impl Sequence {
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.competency.id.as_str()).collect()
    }

    pub fn forced(&self) -> impl Iterator<Item = &SequencedCompetency> {
        self.entries.iter().filter(|e| e.forced)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CompetencySequencer {
    default_score: f64,
}

impl CompetencySequencer {
    pub fn new(default_score: f64) -> Self {
        Self { default_score }
    }

    pub fn from_config(config: &PlanningConfig) -> Self {
        Self::new(config.default_diagnostic_score)
    }

    /// Order `competencies` for a learner with `scores`.
    ///
    /// Sorted ascending by score (stable, so ties keep catalogue order), then
    /// a greedy pass repeatedly takes the first remaining competency whose
    /// prerequisites are all placed. When none qualifies, the first remaining
    /// one is placed anyway and flagged `forced`. A prerequisite outside the
    /// course can never be placed, so its dependant waits until nothing else
    /// is eligible and is then forced.
    pub fn sequence(&self, competencies: &[Competency], scores: &DiagnosticScoreMap) -> Sequence {
        let mut seen = HashSet::new();
        let unique: Vec<&Competency> = competencies
            .iter()
            .filter(|c| {
                let first = seen.insert(c.id.as_str());
                if !first {
                    debug!(competency_id = %c.id, "ignoring duplicate competency");
                }
                first
            })
            .collect();

        let report = prerequisite_graph::analyze(competencies);
        for cycle in &report.cycles {
            warn!(competencies = ?cycle, "prerequisite cycle");
        }
        for (competency_id, prerequisite_id) in &report.external_prerequisites {
            warn!(%competency_id, %prerequisite_id, "prerequisite outside the course");
        }

        let mut remaining: Vec<(&Competency, f64)> = unique
            .into_iter()
            .map(|c| (c, scores.score_or(&c.id, self.default_score)))
            .collect();
        remaining.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut placed: HashSet<&str> = HashSet::with_capacity(remaining.len());
        let mut entries = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let eligible = remaining.iter().position(|(c, _)| {
                c.prerequisites
                    .iter()
                    .all(|p| placed.contains(p.as_str()))
            });
            let (index, forced) = match eligible {
                Some(i) => (i, false),
                None => (0, true),
            };
            let (competency, score) = remaining.remove(index);
            if forced {
                warn!(competency_id = %competency.id, "forcing competency ahead of unmet prerequisites");
            }
            placed.insert(competency.id.as_str());
            entries.push(SequencedCompetency {
                competency: competency.clone(),
                score,
                forced,
            });
        }

        Sequence { entries, report }
    }
}
