//! Axum route handlers for the Nexla bridge API.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use nexbridge_client::NexlaClient;
use nexbridge_core::{token_preview, Credential, Nexset};

use crate::{error::GatewayError, settings::ApiSettings};

// ── Shared state ─────────────────────────────────────────────────────────────

type Settings = Arc<ApiSettings>;

// ── Request / response types ──────────────────────────────────────────────────

/// Body returned by `POST /api/nexla/connect` on success.
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub token_preview: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Browser origins of the local development front-end.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Build the application router with the given upstream settings.
pub fn create_router(settings: Settings) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/nexla/connect", post(connect))
        .route("/api/nexla/nexsets", get(list_nexsets))
        .with_state(settings)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// CORS for the two fixed dev origins, with credentials allowed.
///
/// tower-http rejects wildcard origins, methods, or headers when credentials
/// are allowed, so everything is listed explicitly.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "message": "Nexla backend is running",
        })),
    )
}

/// `POST /api/nexla/connect` — verify Nexla connectivity.
///
/// Resolves the credential from the environment, exchanges it for a session
/// token, and returns a truncated preview of that token.
///
/// # Errors
/// Returns [`GatewayError::MissingCredentials`] if neither credential
/// variable is set, [`GatewayError::ClientUnavailable`] if the outbound
/// client cannot be built, or [`GatewayError::AuthenticationFailed`] if the
/// token exchange fails.
pub async fn connect(State(settings): State<Settings>) -> Result<impl IntoResponse, GatewayError> {
    let credential = Credential::from_env().map_err(|_| {
        GatewayError::MissingCredentials(
            "Missing authentication. Set NEXLA_SERVICE_KEY or NEXLA_ACCESS_TOKEN in .env file."
                .to_owned(),
        )
    })?;

    tracing::info!(kind = credential.kind(), "connect requested");

    let client = NexlaClient::new(settings.base_url(), credential)
        .map_err(|e| GatewayError::ClientUnavailable(e.to_string()))?;
    let token = client
        .get_access_token()
        .await
        .map_err(|e| GatewayError::AuthenticationFailed(e.to_string()))?;

    Ok(Json(ConnectResponse {
        status: "connected",
        message: "Successfully connected to Nexla",
        token_preview: token_preview(&token),
    }))
}

/// `GET /api/nexla/nexsets` — list nexsets visible to the credential.
///
/// # Errors
/// Returns [`GatewayError::MissingCredentials`] if neither credential
/// variable is set, [`GatewayError::ClientUnavailable`] if the outbound
/// client cannot be built, or [`GatewayError::Upstream`] if the listing
/// call fails.
pub async fn list_nexsets(
    State(settings): State<Settings>,
) -> Result<impl IntoResponse, GatewayError> {
    let credential = Credential::from_env()
        .map_err(|_| GatewayError::MissingCredentials("Missing credentials".to_owned()))?;

    let client = NexlaClient::new(settings.base_url(), credential)
        .map_err(|e| GatewayError::ClientUnavailable(e.to_string()))?;
    let nexsets: Vec<Nexset> = client
        .list_nexsets()
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    tracing::info!(count = nexsets.len(), "nexsets listed");

    Ok(Json(nexsets))
}
