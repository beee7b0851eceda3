//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. Leptos owns `/`, `/login`,
//! `/dashboard` and `/certificate`; the compiled client lives under `/pkg`;
//! everything else (tutorial pages, images) is served from the site directory.

pub mod site;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::StartupError;
use crate::state::AppState;

/// JSON endpoints consumed by the client.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses.json", get(site::courses))
        .route("/api/client-config", get(site::client_config))
        .route("/healthz", get(site::healthz))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static site fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState, site_dir: &Path) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(avesafe_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || avesafe_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let site_service = ServeDir::new(site_dir).append_index_html_on_directories(true);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(site_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
