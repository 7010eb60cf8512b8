//! Contracts between the planning core and its collaborators.

mod catalog;
mod diagnostics;
mod path_store;
mod profile_store;
mod survey;

pub use catalog::{CompetencyRepository, ResourcePool};
pub use diagnostics::DiagnosticScoreProvider;
pub use path_store::PathStore;
pub use profile_store::StyleProfileStore;
pub use survey::SurveyIngestor;

/// Everything the path engine needs from a backing store.
pub trait PathwayStorage:
    CompetencyRepository + ResourcePool + DiagnosticScoreProvider + StyleProfileStore + PathStore
{
}

impl<T> PathwayStorage for T where
    T: CompetencyRepository
        + ResourcePool
        + DiagnosticScoreProvider
        + StyleProfileStore
        + PathStore
{
}
