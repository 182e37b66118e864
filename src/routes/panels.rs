//! Panel layout routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::panel::{PanelError, RenderNode, Renderable, catalog};
use crate::state::AppState;

/// `GET /api/panels` — names of every composable panel.
pub async fn list_panels() -> Json<Vec<&'static str>> {
    Json(catalog::PANEL_NAMES.to_vec())
}

/// `GET /api/panels/:name` — render a named panel with the configured layout.
pub async fn get_panel(State(state): State<AppState>, Path(name): Path<String>) -> Result<Json<RenderNode>, StatusCode> {
    let panel = catalog::compose(&name, state.panel).map_err(|e| match e {
        PanelError::UnknownPanel(_) => StatusCode::NOT_FOUND,
        PanelError::DuplicateKey { .. } => {
            tracing::error!(error = %e, "panel composition is malformed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    })?;
    Ok(Json(panel.render()))
}

#[cfg(test)]
#[path = "panels_test.rs"]
mod tests;
