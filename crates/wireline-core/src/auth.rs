use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Free-form provider hints attached to an auth record
pub type Attributes = BTreeMap<String, String>;

/// Attribute keys understood by Wireline
pub mod attributes {
    /// Wire API variant the backend speaks (`chat` or `responses`)
    pub const WIRE_API: &str = "wire_api";
    /// Base URL override for the backend
    pub const BASE_URL: &str = "base_url";
    /// API key override for the backend
    pub const API_KEY: &str = "api_key";
}

/// Credential and connection record for a single backend
///
/// Owned by whatever credential store resolved it. Wireline only ever reads
/// it. A record with `attributes: None` and one with an empty map both mean
/// "no hints provided".
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth {
    /// Stable identifier of the record in its store
    #[serde(default)]
    pub id: String,
    /// Provider the record belongs to
    #[serde(default)]
    pub provider: String,
    /// Provider hints keyed by attribute name
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

impl Auth {
    /// Create a record without attributes
    pub fn new(id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            attributes: None,
        }
    }

    /// Replace the attribute map
    #[must_use]
    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = Some(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Raw attribute value, exactly as stored
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key).map(String::as_str)
    }

    /// Attribute value with surrounding whitespace removed
    ///
    /// Values that are empty after trimming are treated as unset.
    pub fn trimmed_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).map(str::trim).filter(|v| !v.is_empty())
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Redacted<'a>(&'a Attributes);

        impl fmt::Debug for Redacted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.0.iter().map(|(k, v)| {
                        let value = if k == attributes::API_KEY { "[REDACTED]" } else { v.as_str() };
                        (k, value)
                    }))
                    .finish()
            }
        }

        f.debug_struct("Auth")
            .field("id", &self.id)
            .field("provider", &self.provider)
            .field("attributes", &self.attributes.as_ref().map(Redacted))
            .finish()
    }
}
