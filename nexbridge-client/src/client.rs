//! Minimal client for the two Nexla REST operations the bridge uses.
//!
//! Session tokens are obtained per call and never cached. Every bridge
//! request constructs a fresh client, so there is no token state to
//! invalidate and no retry logic anywhere.

use std::time::Duration;

use reqwest::{header, Client, Url};
use serde::Deserialize;

use nexbridge_core::{token_preview, Credential, Nexset};

use crate::error::ClientError;

/// Default Nexla API endpoint, matching the platform SDK default.
pub const DEFAULT_API_URL: &str = "https://dataops.nexla.io/nexla-api";

/// Versioned media type the Nexla API expects on every request.
const NEXLA_ACCEPT: &str = "application/vnd.nexla.api.v1+json";

/// Per-request timeout. A hung upstream must not pin a handler task.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire shape of the Nexla token endpoints.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

/// HTTP client for the Nexla platform API.
///
/// Request-scoped: build one per bridge request from the resolved
/// [`Credential`], run a single logical operation, drop it.
#[derive(Debug, Clone)]
pub struct NexlaClient {
    http: Client,
    base_url: Url,
    credential: Credential,
}

impl NexlaClient {
    /// Creates a client for the given API base URL and credential.
    ///
    /// The base URL is normalised to end with `/` so endpoint paths join
    /// onto it instead of replacing its last segment.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Build`] if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, credential: Credential) -> Result<Self, ClientError> {
        let mut url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(concat!("nexbridge/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { http, base_url: url, credential })
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Obtains a session token for the configured credential.
    ///
    /// A service key is exchanged via `POST token` with Basic authorization;
    /// an access token is refreshed via `POST token/refresh` with Bearer
    /// authorization. Either way the response carries the session token used
    /// for subsequent API calls.
    ///
    /// # Errors
    /// Returns [`ClientError::Api`] on a non-success status,
    /// [`ClientError::Transport`] if the request cannot be completed, or
    /// [`ClientError::Decode`] if the response is not the expected shape.
    pub async fn get_access_token(&self) -> Result<String, ClientError> {
        let (path, authorization) = match &self.credential {
            Credential::ServiceKey(key) => ("token", format!("Basic {key}")),
            Credential::AccessToken(token) => ("token/refresh", format!("Bearer {token}")),
        };
        let url = self.endpoint(path)?;

        tracing::debug!(kind = self.credential.kind(), %url, "requesting session token");

        let resp = self
            .http
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::ACCEPT, NEXLA_ACCEPT)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "token request failed");
                ClientError::Transport(e.to_string())
            })?;

        let resp = check_status(resp).await?;
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(
            token_preview = %token_preview(&token.access_token),
            "session token obtained"
        );

        Ok(token.access_token)
    }

    /// Lists the nexsets visible to the configured credential.
    ///
    /// Obtains a session token first, then fetches `GET data_sets` with
    /// Bearer authorization. Upstream fields outside the projected four are
    /// dropped during deserialization.
    ///
    /// # Errors
    /// Same failure modes as [`NexlaClient::get_access_token`], for either
    /// of the two requests involved.
    pub async fn list_nexsets(&self) -> Result<Vec<Nexset>, ClientError> {
        let session_token = self.get_access_token().await?;
        let url = self.endpoint("data_sets")?;

        tracing::debug!(%url, "listing nexsets");

        let resp = self
            .http
            .get(url)
            .bearer_auth(&session_token)
            .header(header::ACCEPT, NEXLA_ACCEPT)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "nexset listing request failed");
                ClientError::Transport(e.to_string())
            })?;

        let resp = check_status(resp).await?;
        let nexsets: Vec<Nexset> = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        tracing::debug!(count = nexsets.len(), "nexsets listed");

        Ok(nexsets)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(|e| ClientError::InvalidBaseUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }
}

/// Converts a non-success response into [`ClientError::Api`], preserving the
/// body for the caller's error message.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    tracing::warn!(status = status.as_u16(), "Nexla API call failed");
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api { status: status.as_u16(), body })
}
