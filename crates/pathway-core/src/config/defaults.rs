// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "pathway.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Planning ---
pub const DEFAULT_DIAGNOSTIC_SCORE: f64 = 20.0; // unassessed topics get the most help
pub const DEFAULT_FALLBACK_STEPS: usize = 4;
pub const DEFAULT_STEP_MINUTES: u32 = 30;
pub const DEFAULT_STEP_POINTS: u32 = 1;

// --- Style ---
pub const DEFAULT_STRENGTH_THRESHOLD: f64 = 30.0;
pub const DEFAULT_WEAKNESS_THRESHOLD: f64 = 20.0;

// --- Adaptation ---
pub const DEFAULT_RECENT_WINDOW: usize = 3;
pub const DEFAULT_REINFORCEMENT_STEPS: usize = 2;
pub const DEFAULT_CHALLENGE_STEPS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
