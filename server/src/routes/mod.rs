//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the crawler endpoints (`robots.txt`, `sitemap.xml`)
//! and a health check together with Leptos SSR rendering under a single Axum
//! router. Compiled WASM/CSS is served from `/pkg`; everything else in the
//! Leptos site root (images, placeholder) is the static fallback.

pub mod crawl;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use rental_client::app::{App, shell};
use rental_client::util::browser::SiteOrigin;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// State shared by the non-Leptos handlers.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub origin: Arc<str>,
}

impl SiteState {
    pub fn new(origin: &str) -> Self {
        Self { origin: Arc::from(origin) }
    }
}

/// Crawler and health routes, independent of the Leptos configuration.
fn site_routes(state: SiteState) -> Router {
    Router::new()
        .route("/robots.txt", get(crawl::robots))
        .route("/sitemap.xml", get(crawl::sitemap))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Context installed for every SSR render. Canonical URLs are built from
/// the configured origin, never from the request `Host` header.
fn site_context(origin: SiteOrigin) -> impl Fn() + Clone + Send + Sync + 'static {
    move || provide_context(origin.clone())
}

/// Full application: site routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "leptos routes registered");

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, site_context(SiteOrigin::new(&config.site_origin)), {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_service = ServeDir::new(&site_root_path);

    Ok(site_routes(SiteState::new(&config.site_origin))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(assets_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
