//! Painting and artist REST routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::painting::{self, Artist, Painting, PaintingError};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaintingBody {
    pub prompt: String,
    pub artist_id: i64,
}

#[derive(Deserialize)]
pub struct UpdatePaintingBody {
    pub title: String,
}

#[derive(Deserialize)]
pub struct CreateArtistBody {
    pub name: String,
}

pub(crate) fn painting_error_to_status(err: PaintingError) -> StatusCode {
    match err {
        PaintingError::NotFound(_) => StatusCode::NOT_FOUND,
        PaintingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PaintingError::StoreUnavailable(e) => {
            tracing::error!(error = %e, "painting store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `GET /api/paintings` — list paintings in creation order.
pub async fn list_paintings(State(state): State<AppState>) -> Result<Json<Vec<Painting>>, StatusCode> {
    let rows = state
        .store
        .list_all()
        .await
        .map_err(painting_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/paintings/:id` — fetch one painting.
pub async fn get_painting(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Painting>, StatusCode> {
    let row = state
        .store
        .get_by_id(id)
        .await
        .map_err(painting_error_to_status)?;
    Ok(Json(row))
}

/// `POST /api/paintings` — create a painting.
pub async fn create_painting(
    State(state): State<AppState>,
    Json(body): Json<CreatePaintingBody>,
) -> Result<(StatusCode, Json<Painting>), StatusCode> {
    let row = painting::create_painting(state.store.as_ref(), &body.prompt, body.artist_id)
        .await
        .map_err(painting_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/paintings/:id` — set a painting's title.
pub async fn update_painting(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePaintingBody>,
) -> Result<Json<Painting>, StatusCode> {
    let row = painting::rename_painting(state.store.as_ref(), id, &body.title)
        .await
        .map_err(painting_error_to_status)?;
    Ok(Json(row))
}

/// `GET /api/artists` — list artists.
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, StatusCode> {
    let rows = state
        .store
        .list_artists()
        .await
        .map_err(painting_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/artists` — register an artist.
pub async fn create_artist(
    State(state): State<AppState>,
    Json(body): Json<CreateArtistBody>,
) -> Result<(StatusCode, Json<Artist>), StatusCode> {
    let row = painting::register_artist(state.store.as_ref(), &body.name)
        .await
        .map_err(painting_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
#[path = "paintings_test.rs"]
mod tests;
