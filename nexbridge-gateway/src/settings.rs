//! Upstream API settings shared across request handlers.

use nexbridge_client::DEFAULT_API_URL;

/// Environment variable overriding the upstream Nexla API base URL.
pub const API_URL_VAR: &str = "NEXLA_API_URL";

/// Immutable upstream settings handed to every handler.
///
/// The only shared state in the bridge. Credentials are deliberately not
/// part of it; they are re-read from the environment on each request.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    base_url: String,
}

impl ApiSettings {
    /// Creates settings pointing at the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Reads settings from the environment, falling back to the platform
    /// default endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self { base_url }
    }

    /// Returns the upstream API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
