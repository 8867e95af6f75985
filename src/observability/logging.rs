//! Structured logging.
//!
//! Uses the `tracing` crate with an `EnvFilter`. `RUST_LOG` wins when set;
//! otherwise the configured level applies to this crate and to `tower_http`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    format!(
        "{crate_name}={level},tower_http={level}",
        crate_name = env!("CARGO_CRATE_NAME"),
        level = config.log_level
    )
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
