use std::env;
use std::fmt;

use crate::error::CoreError;

/// Environment variable holding a Nexla service key.
pub const SERVICE_KEY_VAR: &str = "NEXLA_SERVICE_KEY";

/// Environment variable holding a Nexla access token.
pub const ACCESS_TOKEN_VAR: &str = "NEXLA_ACCESS_TOKEN";

/// A Nexla API credential, resolved from the process environment.
///
/// Two forms exist: a long-lived service key exchanged for a session token,
/// and a short-lived access token refreshed into one. The service key takes
/// precedence when both variables are set.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Long-lived service key from [`SERVICE_KEY_VAR`].
    ServiceKey(String),
    /// Short-lived access token from [`ACCESS_TOKEN_VAR`].
    AccessToken(String),
}

impl Credential {
    /// Resolves the credential from the process environment.
    ///
    /// A variable set to the empty string counts as absent. Credentials are
    /// read fresh on every call; nothing is cached.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingCredentials`] if neither variable holds
    /// a non-empty value.
    pub fn from_env() -> Result<Self, CoreError> {
        if let Some(key) = non_empty_var(SERVICE_KEY_VAR) {
            return Ok(Self::ServiceKey(key));
        }
        if let Some(token) = non_empty_var(ACCESS_TOKEN_VAR) {
            return Ok(Self::AccessToken(token));
        }
        Err(CoreError::MissingCredentials)
    }

    /// Returns a short label for the credential form, safe for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServiceKey(_) => "service_key",
            Self::AccessToken(_) => "access_token",
        }
    }
}

// Secrets must never leak through debug formatting of request state.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ServiceKey(_) => "ServiceKey",
            Self::AccessToken(_) => "AccessToken",
        };
        f.debug_tuple(name).field(&"<redacted>").finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
