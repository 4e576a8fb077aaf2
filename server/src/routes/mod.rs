//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own: every data call goes from the browser
//! straight to the PlagiGuard backend. This router only renders the Leptos
//! pages, serves the compiled `/pkg` assets, and answers health checks.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Routes that do not depend on the Leptos build output.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR pages plus static assets and health checks.
///
/// # Errors
///
/// Returns [`HostError::LeptosConfig`] if the `[[workspace.metadata.leptos]]`
/// section cannot be loaded.
pub fn leptos_app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
