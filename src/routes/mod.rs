//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the REST painting/artist endpoints, the named-operation
//! endpoint, and the panel layout endpoint under a single Axum router.

pub mod operations;
pub mod paintings;
pub mod panels;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/paintings",
            get(paintings::list_paintings).post(paintings::create_painting),
        )
        .route(
            "/api/paintings/{id}",
            get(paintings::get_painting).patch(paintings::update_painting),
        )
        .route("/api/artists", get(paintings::list_artists).post(paintings::create_artist))
        .route("/api/operations", post(operations::execute_operation))
        .route("/api/panels", get(panels::list_panels))
        .route("/api/panels/{name}", get(panels::get_panel))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
