//! Domain models shared by every Pathway crate.

mod competency;
mod diagnostic;
mod path;
mod resource;
mod signal;
mod step;
mod style;
mod survey;

pub use competency::Competency;
pub use diagnostic::DiagnosticScoreMap;
pub use path::LearningPath;
pub use resource::{Resource, ResourceKind};
pub use signal::{Adaptation, PerformanceSignal};
pub use step::{Step, StepKind, StepStatus};
pub use style::{LearningStyle, StyleProfile, StyleVector};
pub use survey::{RawSurveyResponse, SurveyAnswers, SurveyTranslation};
