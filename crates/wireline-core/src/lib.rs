//! Shared types for Wireline
//!
//! Holds the credential record read by the executor and the wire API
//! variants an OpenAI-compatible backend can speak.

#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod wire_api;

pub use auth::{Attributes, Auth, attributes};
pub use wire_api::WireApi;
