//! ResourceSelector: rank a competency's resources by style compatibility
//! and take the top N.

use pathway_core::models::{Resource, StyleProfile};
use pathway_style::compatibility;

/// Resources chosen for one competency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub resources: Vec<Resource>,
    /// How many fewer than requested were available.
    pub shortfall: usize,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceSelector;

impl ResourceSelector {
    pub fn new() -> Self {
        Self
    }

    /// Candidates with their compatibility, best first. Equal scores keep
    /// the candidates' original order.
    pub fn rank(
        &self,
        candidates: Vec<Resource>,
        profile: Option<&StyleProfile>,
    ) -> Vec<(Resource, f64)> {
        let mut ranked: Vec<(Resource, f64)> = candidates
            .into_iter()
            .map(|r| {
                let score = compatibility(profile, &r);
                (r, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Top `count` candidates by compatibility. A pool smaller than `count`
    /// is used in full and the gap reported as `shortfall`.
    pub fn select(
        &self,
        candidates: Vec<Resource>,
        profile: Option<&StyleProfile>,
        count: usize,
    ) -> Selection {
        let resources: Vec<Resource> = self
            .rank(candidates, profile)
            .into_iter()
            .take(count)
            .map(|(r, _)| r)
            .collect();
        Selection {
            shortfall: count.saturating_sub(resources.len()),
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pathway_core::models::{LearningStyle, ResourceKind, StyleVector};

    use super::*;

    fn kinesthetic() -> StyleProfile {
        StyleProfile {
            scores: StyleVector::new(0.0, 0.0, 0.0, 100.0),
            dominant: LearningStyle::Kinesthetic,
            answered: 4,
            dropped: 0,
            recorded_at: Utc::now(),
        }
    }

    fn pool() -> Vec<Resource> {
        vec![
            Resource::new("read", "c", "Read", ResourceKind::Reading),
            Resource::new("sim", "c", "Sim", ResourceKind::Simulation),
            Resource::new("video", "c", "Video", ResourceKind::Video),
        ]
    }

    #[test]
    fn picks_most_compatible_first() {
        let selection = ResourceSelector::new().select(pool(), Some(&kinesthetic()), 2);
        let ids: Vec<&str> = selection.resources.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["sim", "video"]);
        assert_eq!(selection.shortfall, 0);
    }

    #[test]
    fn no_profile_keeps_pool_order() {
        let selection = ResourceSelector::new().select(pool(), None, 3);
        let ids: Vec<&str> = selection.resources.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["read", "sim", "video"]);
    }

    #[test]
    fn thin_and_empty_pools_report_shortfall() {
        let selector = ResourceSelector::new();
        let thin = selector.select(pool(), None, 5);
        assert_eq!(thin.resources.len(), 3);
        assert_eq!(thin.shortfall, 2);

        let empty = selector.select(Vec::new(), None, 4);
        assert!(empty.is_empty());
        assert_eq!(empty.shortfall, 4);
    }
}
