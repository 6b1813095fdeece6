//! Episode repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use podcast_core::error::{AppError, ErrorKind};
use podcast_core::result::AppResult;
use podcast_core::types::{EpisodeId, PodcastId};
use podcast_entity::{CreateEpisode, Episode};

use crate::store::EpisodeStore;

/// Repository for episode persistence.
#[derive(Debug, Clone)]
pub struct EpisodeRepository {
    pool: PgPool,
}

impl EpisodeRepository {
    /// Create a new episode repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpisodeStore for EpisodeRepository {
    async fn create(&self, podcast_id: PodcastId, data: CreateEpisode) -> AppResult<Episode> {
        sqlx::query_as::<_, Episode>(
            "INSERT INTO episodes (title, category, podcast_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.category)
        .bind(podcast_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create episode", e))
    }

    async fn save(&self, episode: Episode) -> AppResult<Episode> {
        sqlx::query_as::<_, Episode>(
            "UPDATE episodes SET title = $2, category = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(episode.id)
        .bind(&episode.title)
        .bind(&episode.category)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update episode", e))?
        .ok_or_else(|| AppError::not_found(format!("Episode {} not found", episode.id)))
    }

    async fn delete(&self, id: EpisodeId) -> AppResult<()> {
        sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete episode", e))?;
        Ok(())
    }
}
