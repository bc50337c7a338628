//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the themed settings page, the two preference
//! endpoints the client posts to, a read-only preferences API, and the wasm
//! bundle under `/pkg`.

pub mod auth;
pub mod error;
pub mod preferences;
pub mod settings;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. `pkg_dir` holds the built client bundle.
pub fn app(state: AppState, pkg_dir: &Path) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_settings))
        .route("/settings", get(settings::settings_page))
        .route("/save_preferences", post(preferences::save_preferences))
        .route("/change_language", post(preferences::change_language))
        .route("/api/preferences", get(preferences::current_preferences))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_settings() -> Redirect {
    Redirect::temporary("/settings")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
