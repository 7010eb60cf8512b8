//! Configuration system for Pathway.
//! TOML-based: file > environment > compiled defaults, validated once after loading.

pub mod adaptation_config;
pub mod defaults;
pub mod observability_config;
pub mod planning_config;
pub mod storage_config;
pub mod style_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use adaptation_config::AdaptationConfig;
pub use observability_config::ObservabilityConfig;
pub use planning_config::{PlanningConfig, StepBand};
pub use storage_config::StorageConfig;
pub use style_config::{StyleConfig, UnmappedPolicy};

use crate::constants::MAX_DIAGNOSTIC_SCORE;
use crate::errors::ConfigError;

/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "PATHWAY_DB_PATH";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "PATHWAY_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayConfig {
    pub storage: StorageConfig,
    pub planning: PlanningConfig,
    pub style: StyleConfig,
    pub adaptation: AdaptationConfig,
    pub observability: ObservabilityConfig,
}

impl PathwayConfig {
    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `PATHWAY_*` overrides using the given lookup.
    /// Taking the lookup as a closure keeps tests off the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = lookup(ENV_DB_PATH).filter(|v| !v.is_empty()) {
            self.storage.db_path = db_path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let planning = &self.planning;
        if !(0.0..=MAX_DIAGNOSTIC_SCORE).contains(&planning.default_diagnostic_score) {
            return Err(invalid(
                "planning.default_diagnostic_score",
                "must be between 0 and 100",
            ));
        }
        if planning.fallback_steps == 0 {
            return Err(invalid("planning.fallback_steps", "must be at least 1"));
        }
        for (i, band) in planning.bands.iter().enumerate() {
            if !(0.0..=MAX_DIAGNOSTIC_SCORE).contains(&band.min_score) {
                return Err(invalid("planning.bands", "min_score must be between 0 and 100"));
            }
            if band.steps == 0 {
                return Err(invalid("planning.bands", "steps must be at least 1"));
            }
            if let Some(prev) = i.checked_sub(1).map(|j| planning.bands[j]) {
                if band.min_score >= prev.min_score {
                    return Err(invalid(
                        "planning.bands",
                        "min_score must be strictly descending",
                    ));
                }
                if band.steps < prev.steps {
                    return Err(invalid(
                        "planning.bands",
                        "steps must not decrease as min_score decreases",
                    ));
                }
            }
        }
        if let Some(last) = planning.bands.last() {
            if planning.fallback_steps < last.steps {
                return Err(invalid(
                    "planning.fallback_steps",
                    "must be at least the steps of the lowest band",
                ));
            }
        }

        let style = &self.style;
        if style.weakness_threshold > style.strength_threshold {
            return Err(invalid(
                "style.weakness_threshold",
                "must not exceed style.strength_threshold",
            ));
        }

        if self.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
