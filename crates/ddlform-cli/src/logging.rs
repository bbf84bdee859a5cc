//! Logging setup for the ddlform CLI
//!
//! Log lines go to stderr so stdout only carries generated SQL.
//! RUST_LOG takes precedence over the configured default filter.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::LoggingSettings;

/// Initialize the global subscriber
pub fn init(settings: &LoggingSettings, verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose {
        "debug"
    } else {
        settings.default_filter.as_str()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let layer = if settings.json {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .json()
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(settings.include_location)
            .with_line_number(settings.include_location)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()?;

    tracing::debug!(json = settings.json, "Logging initialized");
    Ok(())
}
