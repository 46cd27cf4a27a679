//! Logging for Wireline
//!
//! Installs a `tracing-subscriber` registry writing to stderr so command
//! output on stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};
use wireline_config::{LogFormat, TelemetryConfig};

/// Resolve the filter directive to use
///
/// `RUST_LOG` wins over the configured filter, which wins over `default_filter`.
fn filter_directive(config: Option<&TelemetryConfig>, default_filter: &str) -> String {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.and_then(|c| c.log_filter.clone()))
        .unwrap_or_else(|| default_filter.to_owned())
}

/// Initialize logging from configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    let directive = filter_directive(config, default_filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}' ({e}), falling back to 'info'");
        EnvFilter::new("info")
    });

    let format = config.map(|c| c.format).unwrap_or_default();

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(filter = %directive, ?format, "logging initialized");

    Ok(())
}
