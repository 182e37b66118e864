//! Painting service: records, validation, and the store seam.
//!
//! DESIGN
//! ======
//! `PaintingStore` is the facade every caller goes through: routes, the
//! operation dispatcher, and tests. Two implementations exist, Postgres for
//! deployments and an in-memory store for tests and local runs. Both assign
//! ids in strictly increasing order and list in creation order.
//!
//! ERROR HANDLING
//! ==============
//! Input is validated into `NewPainting` before any store is touched, so a
//! rejected create never mutates state. Artist existence is checked by the
//! store itself, atomically with the insert.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const MAX_PROMPT_LEN: usize = 600;
pub const MAX_TITLE_LEN: usize = 280;
pub const MAX_ARTIST_NAME_LEN: usize = 120;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PaintingError {
    #[error("painting not found: {0}")]
    NotFound(i64),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

impl crate::operation::ErrorCode for PaintingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_PAINTING_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
            Self::StoreUnavailable(_) => "E_STORE_UNAVAILABLE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

/// One stored painting. Mirrors the `paintings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Painting {
    pub id: i64,
    pub title: Option<String>,
    pub prompt: String,
    pub artist_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub inspiration_image_url: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// The owning entity a painting references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

/// Validated create input. Only constructible through [`NewPainting::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPainting {
    prompt: String,
    artist_id: i64,
}

impl NewPainting {
    /// Validate raw create input.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty or over-long prompt, a prompt with
    /// control characters, or a non-positive artist id.
    pub fn new(prompt: &str, artist_id: i64) -> Result<Self, PaintingError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PaintingError::Validation("prompt must not be empty".into()));
        }
        if prompt.chars().count() > MAX_PROMPT_LEN {
            return Err(PaintingError::Validation(format!("prompt exceeds {MAX_PROMPT_LEN} characters")));
        }
        reject_control_chars("prompt", prompt)?;
        if artist_id <= 0 {
            return Err(PaintingError::Validation(format!("unknown artist: {artist_id}")));
        }
        Ok(Self { prompt: prompt.to_owned(), artist_id })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn artist_id(&self) -> i64 {
        self.artist_id
    }
}

/// Trim and bound a title.
///
/// # Errors
///
/// Returns `Validation` for an empty or over-long title.
pub fn validate_title(title: &str) -> Result<String, PaintingError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(PaintingError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(PaintingError::Validation(format!("title exceeds {MAX_TITLE_LEN} characters")));
    }
    reject_control_chars("title", title)?;
    Ok(title.to_owned())
}

/// Trim and bound an artist name.
///
/// # Errors
///
/// Returns `Validation` for an empty or over-long name.
pub fn validate_artist_name(name: &str) -> Result<String, PaintingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PaintingError::Validation("artist name must not be empty".into()));
    }
    if name.chars().count() > MAX_ARTIST_NAME_LEN {
        return Err(PaintingError::Validation(format!("artist name exceeds {MAX_ARTIST_NAME_LEN} characters")));
    }
    reject_control_chars("artist name", name)?;
    Ok(name.to_owned())
}

/// Postgres refuses NUL in text columns, so it and other control characters
/// are rejected up front. Line breaks and tabs are allowed.
fn reject_control_chars(field: &str, value: &str) -> Result<(), PaintingError> {
    if value.chars().any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t')) {
        return Err(PaintingError::Validation(format!("{field} contains control characters")));
    }
    Ok(())
}

pub(crate) fn unknown_artist(artist_id: i64) -> PaintingError {
    PaintingError::Validation(format!("unknown artist: {artist_id}"))
}

// =============================================================================
// STORE
// =============================================================================

/// Read/write access to the paintings collection.
#[async_trait::async_trait]
pub trait PaintingStore: Send + Sync {
    /// All paintings in creation order.
    async fn list_all(&self) -> Result<Vec<Painting>, PaintingError>;

    async fn get_by_id(&self, id: i64) -> Result<Painting, PaintingError>;

    /// Insert a painting, assigning its id and creation timestamp.
    /// Title and image URL start unset.
    async fn create(&self, input: &NewPainting) -> Result<Painting, PaintingError>;

    /// Set the title. `title` must already be validated.
    async fn update_title(&self, id: i64, title: &str) -> Result<Painting, PaintingError>;

    async fn list_artists(&self) -> Result<Vec<Artist>, PaintingError>;

    /// Insert an artist. `name` must already be validated.
    async fn create_artist(&self, name: &str) -> Result<Artist, PaintingError>;
}

// =============================================================================
// FACADE
// =============================================================================

/// Validate and create a painting.
///
/// # Errors
///
/// Returns `Validation` for bad input or an unknown artist, or
/// `StoreUnavailable` if the store fails.
pub async fn create_painting(store: &dyn PaintingStore, prompt: &str, artist_id: i64) -> Result<Painting, PaintingError> {
    let input = NewPainting::new(prompt, artist_id)?;
    let painting = store.create(&input).await?;
    tracing::info!(painting_id = painting.id, artist_id, "painting created");
    Ok(painting)
}

/// Validate and set a painting's title.
///
/// # Errors
///
/// Returns `Validation`, `NotFound`, or `StoreUnavailable`.
pub async fn rename_painting(store: &dyn PaintingStore, id: i64, title: &str) -> Result<Painting, PaintingError> {
    let title = validate_title(title)?;
    let painting = store.update_title(id, &title).await?;
    tracing::info!(painting_id = id, "painting retitled");
    Ok(painting)
}

/// Validate and create an artist.
///
/// # Errors
///
/// Returns `Validation` or `StoreUnavailable`.
pub async fn register_artist(store: &dyn PaintingStore, name: &str) -> Result<Artist, PaintingError> {
    let name = validate_artist_name(name)?;
    let artist = store.create_artist(&name).await?;
    tracing::info!(artist_id = artist.id, "artist registered");
    Ok(artist)
}

#[cfg(test)]
#[path = "painting_test.rs"]
mod tests;
