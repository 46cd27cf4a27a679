#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod provider;
pub mod telemetry;

use indexmap::IndexMap;
use serde::Deserialize;

pub use provider::ProviderConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level Wireline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
    /// OpenAI-compatible providers keyed by name, in declaration order
    #[serde(default)]
    pub providers: IndexMap<String, ProviderConfig>,
}
