//! Request targeting: which wire API to speak and where to send it

use wireline_core::{Auth, WireApi, attributes};

/// Determine the wire API variant for a backend
///
/// Reads the `wire_api` attribute, ignoring surrounding whitespace. Only the
/// exact values `chat` and `responses` are recognized; a missing record,
/// missing attributes, a missing key or any other value all resolve to
/// [`WireApi::Chat`].
pub fn resolve_wire_api(auth: Option<&Auth>) -> WireApi {
    let Some(raw) = auth.and_then(|a| a.attribute(attributes::WIRE_API)) else {
        return WireApi::default();
    };

    let value = raw.trim();
    value.parse().unwrap_or_else(|_| {
        tracing::debug!(wire_api = value, "unrecognized wire_api attribute, using default");
        WireApi::default()
    })
}

/// Build the endpoint URL for a backend
///
/// Appends the path for the resolved wire API to `base_url` with exactly one
/// `/` between them. The base is otherwise used as-is.
pub fn build_request_url(base_url: &str, auth: Option<&Auth>) -> String {
    let suffix = resolve_wire_api(auth).path_suffix();
    if base_url.ends_with('/') {
        format!("{base_url}{suffix}")
    } else {
        format!("{base_url}/{suffix}")
    }
}
