//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host's own endpoints with Leptos SSR rendering
//! under a single Axum router. All session logic runs in the browser; the
//! host only renders pages, serves the WASM bundle, and answers health checks.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::{Json, Redirect};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub api_base_url: String,
}

/// Host endpoints that exist outside the Leptos route table.
pub fn api_routes(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/admin/dashboard", get(redirect_admin_dashboard))
        .with_state(config)
}

async fn healthz(State(config): State<Arc<ServerConfig>>) -> Json<Health> {
    Json(Health { status: "ok", api_base_url: config.api_base_url.clone() })
}

/// Older admin login builds sent visitors here.
async fn redirect_admin_dashboard() -> Redirect {
    Redirect::permanent("/admin")
}

/// API routes + Leptos SSR + the `/pkg` static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: Arc<ServerConfig>) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root.display(), "serving static bundle");

    Ok(api_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
