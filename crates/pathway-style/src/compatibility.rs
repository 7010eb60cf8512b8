//! Learner/resource compatibility: dot product of the learner's weights and
//! the resource's style vector, clamped to `[0, 1]`.

use pathway_core::constants::NEUTRAL_COMPATIBILITY;
use pathway_core::models::{Resource, ResourceKind, StyleProfile, StyleVector};

/// Type-level default vector for resources without their own scores.
pub fn kind_default_vector(kind: ResourceKind) -> StyleVector {
    match kind {
        ResourceKind::Video => StyleVector::new(0.8, 0.7, 0.3, 0.4),
        ResourceKind::Reading => StyleVector::new(0.4, 0.2, 0.9, 0.3),
        ResourceKind::Exercise => StyleVector::new(0.5, 0.3, 0.6, 0.8),
        ResourceKind::Simulation => StyleVector::new(0.7, 0.4, 0.4, 0.9),
        ResourceKind::Game => StyleVector::new(0.6, 0.5, 0.3, 0.8),
        ResourceKind::Quiz => StyleVector::uniform(0.5),
    }
}

/// The vector used to score a resource: its own scores when rated,
/// otherwise its kind's default.
pub fn resource_vector(resource: &Resource) -> StyleVector {
    resource
        .explicit_style_scores()
        .copied()
        .unwrap_or_else(|| kind_default_vector(resource.kind))
}

/// Compatibility in `[0, 1]`. Learners without a profile score every
/// resource at the neutral value.
pub fn compatibility(profile: Option<&StyleProfile>, resource: &Resource) -> f64 {
    match profile {
        Some(profile) => score_vectors(&profile.weights(), &resource_vector(resource)),
        None => NEUTRAL_COMPATIBILITY,
    }
}

/// Dot product of two `[0, 1]` vectors, clamped. NaN collapses to 0.
pub fn score_vectors(learner: &StyleVector, resource: &StyleVector) -> f64 {
    let raw = learner.dot(resource);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}
