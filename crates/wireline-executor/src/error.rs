use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while dispatching a request upstream
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Named provider does not exist in configuration
    #[error("provider not found: {provider}")]
    ProviderNotFound { provider: String },

    /// Neither the auth record nor the provider config supplies a base URL
    #[error("no base URL configured for provider: {provider}")]
    MissingBaseUrl { provider: String },

    /// Caller sent a payload this executor cannot dispatch
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream provider answered with a non-success status
    #[error("provider returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Request never produced a response (connect, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream body was not valid JSON
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ExecutorError {
    /// Whether retrying the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Upstream { status, .. } => *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error(),
            _ => false,
        }
    }
}
