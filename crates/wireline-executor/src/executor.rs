//! OpenAI-compatible request executor

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use wireline_config::ProviderConfig;
use wireline_core::{Auth, attributes};

use crate::error::ExecutorError;
use crate::target::{build_request_url, resolve_wire_api};

/// Sends JSON payloads to an OpenAI-compatible backend
///
/// Connection details come from the provider configuration and may be
/// overridden per call by the `base_url` and `api_key` attributes of the auth
/// record. Payloads are forwarded verbatim; the auth record only decides the
/// endpoint.
pub struct OpenAiCompatExecutor {
    provider: String,
    client: Client,
    base_url: Option<String>,
    api_key: Option<SecretString>,
}

impl OpenAiCompatExecutor {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns `ExecutorError::Internal` if the timeout is invalid or the HTTP
    /// client cannot be built.
    pub fn new(provider: impl Into<String>, config: &ProviderConfig) -> Result<Self, ExecutorError> {
        let provider = provider.into();
        let timeout = config.timeout()?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client for provider '{provider}': {e}"))?;

        tracing::debug!(
            provider = %provider,
            timeout = ?timeout,
            "created executor"
        );

        Ok(Self {
            base_url: config.effective_base_url().map(str::to_owned),
            api_key: config.api_key.clone(),
            provider,
            client,
        })
    }

    /// Provider name
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Base URL for a call, preferring the auth record's override
    pub fn base_url<'a>(&'a self, auth: Option<&'a Auth>) -> Result<&'a str, ExecutorError> {
        auth.and_then(|a| a.trimmed_attribute(attributes::BASE_URL))
            .or(self.base_url.as_deref())
            .ok_or_else(|| ExecutorError::MissingBaseUrl {
                provider: self.provider.clone(),
            })
    }

    /// Fully-qualified endpoint URL for a call
    pub fn request_url(&self, auth: Option<&Auth>) -> Result<String, ExecutorError> {
        Ok(build_request_url(self.base_url(auth)?, auth))
    }

    /// Resolve the API key, preferring the auth record's override
    fn resolve_api_key(&self, auth: Option<&Auth>) -> Option<String> {
        if let Some(key) = auth.and_then(|a| a.trimmed_attribute(attributes::API_KEY)) {
            return Some(key.to_owned());
        }
        self.api_key.as_ref().map(|k| k.expose_secret().to_owned())
    }

    /// Send a non-streaming request and return the upstream JSON body
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for non-object or streaming payloads,
    /// `MissingBaseUrl` when no endpoint is known, `Transport` when no
    /// response arrives, `Upstream` for non-success statuses and `Decode`
    /// when the body is not JSON.
    pub async fn execute(&self, auth: Option<&Auth>, payload: &Value) -> Result<Value, ExecutorError> {
        if !payload.is_object() {
            return Err(ExecutorError::InvalidRequest("payload must be a JSON object".to_owned()));
        }
        if payload.get("stream").and_then(Value::as_bool) == Some(true) {
            return Err(ExecutorError::InvalidRequest(
                "streaming requests are not supported".to_owned(),
            ));
        }

        let wire_api = resolve_wire_api(auth);
        let url = self.request_url(auth)?;

        tracing::debug!(provider = %self.provider, %wire_api, %url, "dispatching upstream request");

        let mut builder = self.client.post(&url).json(payload);
        if let Some(key) = self.resolve_api_key(auth) {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = %self.provider, %url, error = %e, "upstream request failed");
            ExecutorError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!(provider = %self.provider, error = %e, "failed to read upstream error body");
                format!("<unreadable response body: {e}>")
            });
            tracing::warn!(
                provider = %self.provider,
                %wire_api,
                status = %status,
                "upstream returned error"
            );
            return Err(ExecutorError::Upstream { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ExecutorError::Decode(e.to_string()))
    }
}
