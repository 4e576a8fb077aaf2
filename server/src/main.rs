#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    let api = config::bundle_api_base_url();
    tracing::info!(port = config.port, %api, "plagiguard web listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
