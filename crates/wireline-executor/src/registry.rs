use indexmap::IndexMap;
use wireline_config::{Config, ProviderConfig};
use wireline_core::{Auth, WireApi};

use crate::error::ExecutorError;
use crate::executor::OpenAiCompatExecutor;
use crate::target::resolve_wire_api;

/// Build the auth record for a configured provider
pub fn provider_auth(name: &str, config: &ProviderConfig) -> Auth {
    Auth {
        id: format!("config:{name}"),
        provider: name.to_owned(),
        attributes: config.attributes.clone(),
    }
}

/// A configured provider: its executor and the auth record it is called with
pub struct ProviderEntry {
    pub executor: OpenAiCompatExecutor,
    pub auth: Auth,
}

impl ProviderEntry {
    /// Wire API variant this provider resolves to
    pub fn wire_api(&self) -> WireApi {
        resolve_wire_api(Some(&self.auth))
    }

    /// Endpoint URL requests to this provider are sent to
    pub fn request_url(&self) -> Result<String, ExecutorError> {
        self.executor.request_url(Some(&self.auth))
    }
}

/// Executors for every configured provider, in declaration order
pub struct ExecutorRegistry {
    entries: IndexMap<String, ProviderEntry>,
}

impl ExecutorRegistry {
    /// Build one executor per configured provider
    pub fn from_config(config: &Config) -> Result<Self, ExecutorError> {
        let mut entries = IndexMap::with_capacity(config.providers.len());

        for (name, provider) in &config.providers {
            let executor = OpenAiCompatExecutor::new(name.as_str(), provider)?;
            let auth = provider_auth(name, provider);

            tracing::info!(
                provider = %name,
                wire_api = %resolve_wire_api(Some(&auth)),
                "registered provider"
            );

            entries.insert(name.clone(), ProviderEntry { executor, auth });
        }

        Ok(Self { entries })
    }

    /// Look up a provider by name
    pub fn get(&self, name: &str) -> Result<&ProviderEntry, ExecutorError> {
        self.entries.get(name).ok_or_else(|| ExecutorError::ProviderNotFound {
            provider: name.to_owned(),
        })
    }

    /// All providers in declaration order
    pub fn providers(&self) -> impl Iterator<Item = (&str, &ProviderEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config::from_toml(
            r#"
            [providers.openai]
            base_url = "https://api.openai.com/v1"
            attributes = { wire_api = "responses" }

            [providers.azure]
            base_url = "https://my-resource.openai.azure.com/openai/deployments/gpt-4/"
            attributes = { wire_api = "chat" }

            [providers.openrouter]
            base_url = "https://openrouter.ai/api/v1"

            [providers.fireworks.attributes]
            base_url = "https://api.fireworks.ai/inference/v1/"
            wire_api = " responses "
            "#,
        )
        .unwrap()
    }

    #[test]
    fn targets_for_each_provider() {
        let registry = ExecutorRegistry::from_config(&sample()).unwrap();
        assert_eq!(registry.len(), 4);

        let targets: Vec<_> = registry
            .providers()
            .map(|(name, entry)| (name, entry.wire_api(), entry.request_url().unwrap()))
            .collect();

        assert_eq!(
            targets,
            [
                ("openai", WireApi::Responses, "https://api.openai.com/v1/responses".to_owned()),
                (
                    "azure",
                    WireApi::Chat,
                    "https://my-resource.openai.azure.com/openai/deployments/gpt-4/chat/completions".to_owned()
                ),
                ("openrouter", WireApi::Chat, "https://openrouter.ai/api/v1/chat/completions".to_owned()),
                ("fireworks", WireApi::Responses, "https://api.fireworks.ai/inference/v1/responses".to_owned()),
            ]
        );
    }

    #[test]
    fn request_url_targets_the_validated_base_url() {
        let config = Config::from_toml(
            r#"
            [providers.together]
            base_url = "https://api.openai.com/v1"
            attributes = { base_url = "https://api.together.xyz/v1", wire_api = "responses" }
            "#,
        )
        .unwrap();
        let registry = ExecutorRegistry::from_config(&config).unwrap();

        let validated = config.providers["together"].effective_base_url().unwrap();
        let url = registry.get("together").unwrap().request_url().unwrap();
        assert_eq!(validated, "https://api.together.xyz/v1");
        assert_eq!(url, format!("{validated}/responses"));
    }

    #[test]
    fn unknown_provider() {
        let registry = ExecutorRegistry::from_config(&sample()).unwrap();
        let err = registry.get("anthropic").err().unwrap();
        assert!(matches!(err, ExecutorError::ProviderNotFound { ref provider } if provider == "anthropic"));
    }

    #[test]
    fn auth_record_mirrors_provider_attributes() {
        let config = sample();
        let auth = provider_auth("openai", &config.providers["openai"]);
        assert_eq!(auth.id, "config:openai");
        assert_eq!(auth.provider, "openai");
        assert_eq!(auth.attribute("wire_api"), Some("responses"));

        let bare = provider_auth("openrouter", &config.providers["openrouter"]);
        assert!(bare.attributes.is_none());
    }
}
