//! # pathway-style
//!
//! StyleProfiler: survey answers → normalized VARK percentages → dominant
//! style, plus learner/resource compatibility scoring and survey translation.

pub mod compatibility;
pub mod dominance;
pub mod insights;
pub mod profiler;
pub mod survey;

pub use compatibility::{compatibility, kind_default_vector, resource_vector};
pub use dominance::dominant_style;
pub use insights::{insights, learning_preferences, LearningPreferences, StyleInsights};
pub use profiler::StyleProfiler;
pub use survey::{SurveyMapping, SurveyTranslator};
