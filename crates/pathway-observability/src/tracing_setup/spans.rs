//! Span definitions per operation: generation, progress, adaptation, profiling.

/// Create a path generation span.
#[macro_export]
macro_rules! generation_span {
    ($learner_id:expr, $course_id:expr) => {
        tracing::info_span!($crate::spans::names::GENERATION, learner_id = %$learner_id, course_id = %$course_id)
    };
}

/// Create a step progress span.
#[macro_export]
macro_rules! progress_span {
    ($path_id:expr, $order:expr) => {
        tracing::info_span!($crate::spans::names::PROGRESS, path_id = %$path_id, order = $order)
    };
}

/// Create a plan adaptation span.
#[macro_export]
macro_rules! adaptation_span {
    ($path_id:expr, $adaptation:expr) => {
        tracing::info_span!($crate::spans::names::ADAPTATION, path_id = %$path_id, adaptation = ?$adaptation)
    };
}

/// Create a style profiling span.
#[macro_export]
macro_rules! profiling_span {
    ($learner_id:expr) => {
        tracing::info_span!($crate::spans::names::PROFILING, learner_id = %$learner_id)
    };
}

/// Span names, for filters and subscribers that match on them.
pub mod names {
    pub const GENERATION: &str = "pathway.generation";
    pub const PROGRESS: &str = "pathway.progress";
    pub const ADAPTATION: &str = "pathway.adaptation";
    pub const PROFILING: &str = "pathway.profiling";
}
