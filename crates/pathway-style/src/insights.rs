//! Strengths, weaknesses, and resource recommendations derived from a profile.

use pathway_core::config::StyleConfig;
use pathway_core::models::{LearningStyle, ResourceKind, StyleProfile};
use serde::{Deserialize, Serialize};

/// Summary of a learner's profile for display and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleInsights {
    pub dominant: LearningStyle,
    pub strengths: Vec<LearningStyle>,
    pub weaknesses: Vec<LearningStyle>,
    pub recommended_kinds: Vec<ResourceKind>,
    pub preferences: LearningPreferences,
}

/// How a style likes to learn, with study advice to show the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPreferences {
    pub description: String,
    pub preferred_formats: Vec<String>,
    pub study_tips: Vec<String>,
}

impl LearningPreferences {
    fn from_table(description: &str, formats: &[&str], tips: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            preferred_formats: formats.iter().map(|f| f.to_string()).collect(),
            study_tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

pub fn learning_preferences(style: LearningStyle) -> LearningPreferences {
    match style {
        LearningStyle::Visual => LearningPreferences::from_table(
            "Visual learning",
            &["Diagrams and charts", "Educational videos", "Concept maps", "Visual presentations", "Infographics"],
            &["Use colour to organise information", "Draw mind maps", "Picture abstract concepts", "Use flowcharts"],
        ),
        LearningStyle::Auditory => LearningPreferences::from_table(
            "Auditory learning",
            &["Reading aloud", "Group discussions", "Educational podcasts", "Background music", "Verbal explanations"],
            &["Read aloud", "Join discussions", "Use audio recordings", "Explain concepts to others"],
        ),
        LearningStyle::Reading => LearningPreferences::from_table(
            "Reading/writing learning",
            &["Texts and readings", "Detailed note taking", "Lists and outlines", "Written exercises", "Summaries"],
            &["Take detailed notes", "Write summaries", "Use lists and outlines", "Write your own explanations"],
        ),
        LearningStyle::Kinesthetic => LearningPreferences::from_table(
            "Kinesthetic learning",
            &["Hands-on activities", "Simulations", "Experiments", "Educational games", "Handling objects"],
            &["Do practical activities", "Use simulations", "Take frequent breaks", "Learn by doing"],
        ),
    }
}

/// Resource kinds that suit a dominant style.
pub fn recommended_kinds(style: LearningStyle) -> Vec<ResourceKind> {
    match style {
        LearningStyle::Visual => vec![ResourceKind::Video, ResourceKind::Simulation, ResourceKind::Game],
        LearningStyle::Auditory => vec![ResourceKind::Video, ResourceKind::Reading],
        LearningStyle::Reading => vec![ResourceKind::Reading, ResourceKind::Exercise],
        LearningStyle::Kinesthetic => {
            vec![ResourceKind::Simulation, ResourceKind::Game, ResourceKind::Exercise]
        }
    }
}

pub fn insights(profile: &StyleProfile, config: &StyleConfig) -> StyleInsights {
    let strengths = profile
        .scores
        .iter()
        .filter(|(_, score)| *score >= config.strength_threshold)
        .map(|(style, _)| style)
        .collect();
    let weaknesses = profile
        .scores
        .iter()
        .filter(|(_, score)| *score <= config.weakness_threshold)
        .map(|(style, _)| style)
        .collect();

    StyleInsights {
        dominant: profile.dominant,
        strengths,
        weaknesses,
        recommended_kinds: recommended_kinds(profile.dominant),
        preferences: learning_preferences(profile.dominant),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pathway_core::models::StyleVector;

    use super::*;

    #[test]
    fn splits_strengths_and_weaknesses() {
        let profile = StyleProfile {
            scores: StyleVector::new(50.0, 10.0, 30.0, 10.0),
            dominant: LearningStyle::Visual,
            answered: 10,
            dropped: 0,
            recorded_at: Utc::now(),
        };
        let result = insights(&profile, &StyleConfig::default());
        assert_eq!(result.strengths, vec![LearningStyle::Visual, LearningStyle::Reading]);
        assert_eq!(result.weaknesses, vec![LearningStyle::Auditory, LearningStyle::Kinesthetic]);
        assert_eq!(result.recommended_kinds[0], ResourceKind::Video);
        assert_eq!(result.preferences.description, "Visual learning");
    }

    #[test]
    fn every_style_has_preferences_and_tips() {
        for style in LearningStyle::PRECEDENCE {
            let prefs = learning_preferences(style);
            assert!(prefs.description.to_lowercase().contains(&style.as_str()[..4]));
            assert_eq!(prefs.preferred_formats.len(), 5);
            assert_eq!(prefs.study_tips.len(), 4);
        }
    }
}
