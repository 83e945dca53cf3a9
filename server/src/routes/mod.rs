//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the shader REST API together with Leptos SSR rendering
//! under a single Axum router. The Leptos app is served at `/`, compiled
//! client assets at `/pkg`, and static files (favicon, social card) at
//! `/assets`.

pub mod shaders;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// REST routes consumed by the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/shaders",
            get(shaders::list_shaders).post(shaders::create_shader),
        )
        .route(
            "/api/shaders/{id}",
            get(shaders::get_shader)
                .patch(shaders::update_shader)
                .delete(shaders::delete_shader),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the path to the static assets directory.
fn assets_dir() -> PathBuf {
    std::env::var("ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
}

/// Full application router: REST API + Leptos SSR at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site = state.site.clone();

    // Leptos SSR routes with the resolved site metadata available as context,
    // so the shell can emit canonical and Open Graph URLs.
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(site.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) come from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
