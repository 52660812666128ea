//! Tracing subscriber setup for processes embedding the verifier.

use tracing_subscriber::{EnvFilter, fmt};

use sessiongate_core::config::LoggingConfig;
use sessiongate_core::error::AppError;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` overrides the configured level. Fails instead of panicking when
/// a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::configuration(format!("Invalid log level '{}': {e}", config.level)))?;

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| AppError::internal(format!("Failed to install tracing subscriber: {e}")))
}
