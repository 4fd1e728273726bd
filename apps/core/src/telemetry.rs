//! Tracing subscriber setup for the `railmadad` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::error::{AppError, Result};

/// Install the global subscriber. Logs go to stderr so stdout stays JSON.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("tracing already initialised: {}", e)))
}
