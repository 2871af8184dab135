//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api` backend proxy with Leptos SSR page
//! rendering under a single Axum router. The edge guard wraps the page
//! routes so every render is preceded by an authorization decision; the
//! proxy and static assets bypass it.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::guard;
use crate::state::AppState;

/// Backend proxy and operational endpoints, outside the guard.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/auth/oauth/{provider}", get(oauth_redirect))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `GET /auth/oauth/{provider}` — hand the browser to the backend's OAuth
/// entry point; the provider returns control via `/auth/callback?token=`.
async fn oauth_redirect(State(state): State<AppState>, Path(provider): Path<String>) -> Redirect {
    Redirect::temporary(&format!("{}/user-auth/{provider}", state.api_base_url))
}

/// Full application router: API routes + guarded Leptos SSR pages + static
/// assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // Every page render passes through the edge guard first.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(middleware::from_fn_with_state(state.clone(), guard::edge_guard));

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
