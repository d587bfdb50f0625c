//! Entry point for the `nexbridge-gateway` HTTP server.

use std::sync::Arc;

use nexbridge_gateway::{routes::create_router, settings::ApiSettings};
use tracing::info;

#[tokio::main]
async fn main() {
    // Credentials and overrides live in the front-end project's .env, one
    // level above the backend working directory. Absence is not an error.
    dotenvy::from_filename("../.env").ok();

    tracing_subscriber::fmt::init();

    let addr = std::env::var("NEXLA_BRIDGE_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_owned());

    let settings = Arc::new(ApiSettings::from_env());
    let app = create_router(settings);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "nexbridge-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
