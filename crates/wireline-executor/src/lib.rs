//! OpenAI-compatible request execution for Wireline
//!
//! Decides which wire API a backend speaks from its auth record, builds the
//! endpoint URL for it, and dispatches JSON payloads to that endpoint.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod executor;
pub mod registry;
pub mod target;

pub use error::ExecutorError;
pub use executor::OpenAiCompatExecutor;
pub use registry::{ExecutorRegistry, ProviderEntry, provider_auth};
pub use target::{build_request_url, resolve_wire_api};
pub use wireline_core::{Auth, WireApi};
