//! Logging setup.
//!
//! Diagnostics go through `tracing` on stderr so they never interleave with
//! the interactive menus on stdout. When a log directory is configured, a
//! daily-rolling JSON file layer is added as well.

use crate::config::LoggingConfig;
use crate::error::{ContactBookError, Result};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the structured logging system.
///
/// Returns the worker guard for the file appender when one is configured;
/// the caller must keep it alive for the duration of the program or buffered
/// log lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ContactBookError::InvalidConfig(format!("invalid log filter: {e}")))?;

    let registry = Registry::default().with(env_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    let guard = if let Some(log_dir) = &config.file_path {
        let file_appender = rolling::daily(Path::new(log_dir), "contact-book.log");
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_appender)
            .with_ansi(false)
            .with_target(true)
            .json();

        registry.with(console_layer).with(file_layer).init();
        Some(guard)
    } else {
        registry.with(console_layer).init();
        None
    };

    info!("Logging system initialized");
    Ok(guard)
}
