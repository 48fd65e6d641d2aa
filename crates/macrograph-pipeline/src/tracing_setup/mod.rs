//! Tracing setup: subscriber installation, span definitions, and structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use macrograph_core::config::{defaults, ObservabilityConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the subscriber with structured JSON output.
///
/// Respects the `MACROGRAPH_LOG` environment variable for filtering.
/// Defaults to `info` if not set or invalid. Idempotent.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL));
    install(filter, true);
}

/// Initialize with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize from resolved configuration. `log_level` already carries any
/// `MACROGRAPH_LOG` override applied by `MacrographConfig::load`.
pub fn init_from_config(config: &ObservabilityConfig) {
    install(EnvFilter::new(&config.log_level), config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // An embedding host may already own the global subscriber.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init_tracing_with_filter("macrograph=debug");
        init_tracing();
        init_from_config(&ObservabilityConfig::default());
        tracing::info!(event = "heartbeat", "still alive");
    }
}
