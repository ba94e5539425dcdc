//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for applications embedding LingoVault.

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "lingovault.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log a translation lookup with structured data
pub fn log_lookup(locale: &str, key: &str, hit: bool) {
    debug!(
        locale = locale,
        key = key,
        hit = hit,
        "Translation lookup"
    );
}

/// Log translation store mutations
pub fn log_mutation(locale: &str, key: &str, action: &str) {
    info!(
        locale = locale,
        key = key,
        action = action,
        "Translation store mutation"
    );
}
