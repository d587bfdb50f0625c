//! Error types for the client crate.

/// Errors that can occur while talking to the Nexla API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured API base URL could not be parsed.
    #[error("invalid Nexla API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The Nexla API answered with a non-success status.
    #[error("Nexla API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The request could not be sent or the response never arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode Nexla response: {0}")]
    Decode(String),
}
