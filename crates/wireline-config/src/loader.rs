use std::path::Path;

use url::Url;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no provider is configured or a provider has a
    /// missing or unusable base URL or timeout
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.providers.is_empty() {
            anyhow::bail!("at least one provider must be configured");
        }

        for (name, provider) in &self.providers {
            let Some(base_url) = provider.effective_base_url() else {
                anyhow::bail!("provider '{name}' has no base_url");
            };

            let parsed =
                Url::parse(base_url).map_err(|e| anyhow::anyhow!("invalid base_url for provider '{name}': {e}"))?;

            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!(
                    "base_url for provider '{name}' must use http or https, got '{}'",
                    parsed.scheme()
                );
            }

            provider
                .timeout()
                .map_err(|e| anyhow::anyhow!("provider '{name}': {e}"))?;
        }

        Ok(())
    }
}
