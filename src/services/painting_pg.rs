//! Postgres-backed painting store.
//!
//! DESIGN
//! ======
//! Ids come from `BIGSERIAL` sequences, which stay unique under concurrent
//! writers without any application-side locking. The create statement
//! selects the artist row in the same INSERT, so an unknown artist yields no
//! row instead of a foreign-key error and nothing is written.

use sqlx::PgPool;
use time::OffsetDateTime;

use super::painting::{Artist, NewPainting, Painting, PaintingError, PaintingStore, unknown_artist};

type PaintingTuple = (
    i64,
    Option<String>,
    String,
    i64,
    OffsetDateTime,
    Option<String>,
    Option<i32>,
    Option<i32>,
);

const PAINTING_COLUMNS: &str = "id, title, prompt, artist_id, created_at, inspiration_image_url, width, height";

fn painting_from_row(row: PaintingTuple) -> Painting {
    let (id, title, prompt, artist_id, created_at, inspiration_image_url, width, height) = row;
    Painting { id, title, prompt, artist_id, created_at, inspiration_image_url, width, height }
}

#[derive(Clone)]
pub struct PgPaintingStore {
    pool: PgPool,
}

impl PgPaintingStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PaintingStore for PgPaintingStore {
    async fn list_all(&self) -> Result<Vec<Painting>, PaintingError> {
        let rows = sqlx::query_as::<_, PaintingTuple>(&format!(
            "SELECT {PAINTING_COLUMNS} FROM paintings ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(painting_from_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Painting, PaintingError> {
        let row = sqlx::query_as::<_, PaintingTuple>(&format!("SELECT {PAINTING_COLUMNS} FROM paintings WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(painting_from_row)
            .ok_or(PaintingError::NotFound(id))
    }

    async fn create(&self, input: &NewPainting) -> Result<Painting, PaintingError> {
        let row = sqlx::query_as::<_, PaintingTuple>(&format!(
            "INSERT INTO paintings (prompt, artist_id) \
             SELECT $1, id FROM artists WHERE id = $2 \
             RETURNING {PAINTING_COLUMNS}"
        ))
        .bind(input.prompt())
        .bind(input.artist_id())
        .fetch_optional(&self.pool)
        .await?;

        row.map(painting_from_row)
            .ok_or_else(|| unknown_artist(input.artist_id()))
    }

    async fn update_title(&self, id: i64, title: &str) -> Result<Painting, PaintingError> {
        let row = sqlx::query_as::<_, PaintingTuple>(&format!(
            "UPDATE paintings SET title = $2 WHERE id = $1 RETURNING {PAINTING_COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        row.map(painting_from_row)
            .ok_or(PaintingError::NotFound(id))
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, PaintingError> {
        let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM artists ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Artist { id, name })
            .collect())
    }

    async fn create_artist(&self, name: &str) -> Result<Artist, PaintingError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO artists (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(Artist { id, name: name.to_owned() })
    }
}

#[cfg(test)]
#[path = "painting_pg_test.rs"]
mod tests;
