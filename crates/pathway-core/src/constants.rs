/// Neutral share of each style in a profile with no usable answers.
pub const NEUTRAL_STYLE_PERCENTAGE: f64 = 25.0;

/// Compatibility used when a learner has no style profile yet.
pub const NEUTRAL_COMPATIBILITY: f64 = 0.5;

/// Upper bound of a diagnostic percentage.
pub const MAX_DIAGNOSTIC_SCORE: f64 = 100.0;

/// Completion percentage at which a path is considered finished.
pub const COMPLETE_PERCENTAGE: f64 = 100.0;

/// Upper bound on steps a single adaptation may append.
pub const MAX_APPENDED_STEPS: usize = 10;
