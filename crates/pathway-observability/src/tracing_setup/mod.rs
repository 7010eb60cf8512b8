//! Tracing setup: subscriber installation and span definitions.

pub mod spans;

use std::sync::Once;

use pathway_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "PATHWAY_LOG";

/// Initialize the tracing subscriber.
///
/// `PATHWAY_LOG` (e.g. `pathway_planning=debug,pathway_storage=warn`) wins
/// over the configured level. Safe to call more than once; only the first
/// call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json_logs);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    // Another subscriber may already be installed by the host.
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = ObservabilityConfig::default();
        init_tracing(&config);
        init_tracing(&config);
        init_tracing_with_filter("warn");
    }
}
