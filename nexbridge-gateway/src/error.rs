//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during bridge request handling.
///
/// Rendered as `{"detail": "<message>"}` because that is the envelope the
/// front-end reads; message casing follows the wire contract rather than
/// house style.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Neither credential variable is configured. The message differs per
    /// route, so the variant carries it.
    #[error("{0}")]
    MissingCredentials(String),

    /// The upstream authentication call failed.
    #[error("Failed to connect to Nexla: {0}")]
    AuthenticationFailed(String),

    /// The outbound Nexla client could not be constructed.
    #[error("Nexla client unavailable: {0}")]
    ClientUnavailable(String),

    /// Any other failure reported by the Nexla API, passed through verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingCredentials(_) => StatusCode::BAD_REQUEST,
            GatewayError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            GatewayError::ClientUnavailable(_) | GatewayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
