//! Dominant style resolution with an explicit tie-break.

use pathway_core::models::{LearningStyle, StyleVector};

/// The style with the highest score.
///
/// Ties resolve by [`LearningStyle::PRECEDENCE`]: Visual, then Auditory,
/// then Reading, then Kinesthetic. A later style only wins with a strictly
/// greater score.
pub fn dominant_style(scores: &StyleVector) -> LearningStyle {
    let mut best = LearningStyle::PRECEDENCE[0];
    let mut best_score = scores.get(best);
    for (style, score) in scores.iter().skip(1) {
        if score > best_score {
            best = style;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_maximum() {
        let scores = StyleVector::new(10.0, 20.0, 50.0, 20.0);
        assert_eq!(dominant_style(&scores), LearningStyle::Reading);
    }

    #[test]
    fn four_way_tie_is_visual() {
        assert_eq!(dominant_style(&StyleVector::uniform(25.0)), LearningStyle::Visual);
    }

    #[test]
    fn two_way_tie_follows_precedence() {
        let scores = StyleVector::new(0.0, 40.0, 20.0, 40.0);
        assert_eq!(dominant_style(&scores), LearningStyle::Auditory);
        let scores = StyleVector::new(0.0, 10.0, 45.0, 45.0);
        assert_eq!(dominant_style(&scores), LearningStyle::Reading);
    }
}
