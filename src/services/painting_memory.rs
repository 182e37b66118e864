//! In-memory painting store.
//!
//! DESIGN
//! ======
//! One `RwLock` guards the id counters and both maps. A create takes the
//! write lock, checks the artist, bumps the counter, and inserts before
//! releasing, so concurrent writers can never observe or hand out the same
//! id. `BTreeMap` keyed by id gives creation-order listing for free.

use std::collections::BTreeMap;

use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::painting::{Artist, NewPainting, Painting, PaintingError, PaintingStore, unknown_artist};

struct Inner {
    next_painting_id: i64,
    next_artist_id: i64,
    paintings: BTreeMap<i64, Painting>,
    artists: BTreeMap<i64, Artist>,
}

pub struct MemoryPaintingStore {
    inner: RwLock<Inner>,
}

impl MemoryPaintingStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_painting_id: 1,
                next_artist_id: 1,
                paintings: BTreeMap::new(),
                artists: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryPaintingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PaintingStore for MemoryPaintingStore {
    async fn list_all(&self) -> Result<Vec<Painting>, PaintingError> {
        let inner = self.inner.read().await;
        Ok(inner.paintings.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Painting, PaintingError> {
        let inner = self.inner.read().await;
        inner
            .paintings
            .get(&id)
            .cloned()
            .ok_or(PaintingError::NotFound(id))
    }

    async fn create(&self, input: &NewPainting) -> Result<Painting, PaintingError> {
        let mut inner = self.inner.write().await;
        if !inner.artists.contains_key(&input.artist_id()) {
            return Err(unknown_artist(input.artist_id()));
        }

        let id = inner.next_painting_id;
        inner.next_painting_id += 1;

        let painting = Painting {
            id,
            title: None,
            prompt: input.prompt().to_owned(),
            artist_id: input.artist_id(),
            created_at: OffsetDateTime::now_utc(),
            inspiration_image_url: None,
            width: None,
            height: None,
        };
        inner.paintings.insert(id, painting.clone());
        Ok(painting)
    }

    async fn update_title(&self, id: i64, title: &str) -> Result<Painting, PaintingError> {
        let mut inner = self.inner.write().await;
        let Some(painting) = inner.paintings.get_mut(&id) else {
            return Err(PaintingError::NotFound(id));
        };
        painting.title = Some(title.to_owned());
        Ok(painting.clone())
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, PaintingError> {
        let inner = self.inner.read().await;
        Ok(inner.artists.values().cloned().collect())
    }

    async fn create_artist(&self, name: &str) -> Result<Artist, PaintingError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_artist_id;
        inner.next_artist_id += 1;

        let artist = Artist { id, name: name.to_owned() };
        inner.artists.insert(id, artist.clone());
        Ok(artist)
    }
}

#[cfg(test)]
#[path = "painting_memory_test.rs"]
mod tests;
