use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use wireline_core::{Attributes, attributes};

/// Configuration for a single OpenAI-compatible provider
///
/// The provider table doubles as the credential store: `attributes` become
/// the attribute map of the auth record handed to the executor.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Root endpoint, e.g. `https://api.openai.com/v1`
    ///
    /// Kept as written; the request path is appended verbatim.
    #[serde(default)]
    pub base_url: Option<String>,
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Upstream request timeout (e.g. "30s", "2m")
    #[serde(default)]
    pub timeout: Option<String>,
    /// Provider hints such as `wire_api`
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

impl ProviderConfig {
    /// Base URL requests are sent to
    ///
    /// The `base_url` attribute wins over the `base_url` field, matching the
    /// precedence the executor applies to auth records. Blank values count as
    /// unset.
    pub fn effective_base_url(&self) -> Option<&str> {
        fn non_blank(url: &str) -> Option<&str> {
            Some(url.trim()).filter(|url| !url.is_empty())
        }

        self.attributes
            .as_ref()
            .and_then(|a| a.get(attributes::BASE_URL))
            .and_then(|url| non_blank(url))
            .or_else(|| self.base_url.as_deref().and_then(non_blank))
    }

    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration string
    pub fn timeout(&self) -> anyhow::Result<Option<Duration>> {
        self.timeout
            .as_deref()
            .map(|raw| duration_str::parse(raw).map_err(|e| anyhow::anyhow!("invalid timeout '{raw}': {e}")))
            .transpose()
    }
}
