//! Podcast repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use podcast_core::error::{AppError, ErrorKind};
use podcast_core::result::AppResult;
use podcast_core::types::PodcastId;
use podcast_entity::{CreatePodcast, Episode, Podcast};

use crate::store::PodcastStore;

/// Repository for podcast persistence.
#[derive(Debug, Clone)]
pub struct PodcastRepository {
    pool: PgPool,
}

impl PodcastRepository {
    /// Create a new podcast repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_episodes(&self, podcast_id: PodcastId) -> AppResult<Vec<Episode>> {
        sqlx::query_as::<_, Episode>("SELECT * FROM episodes WHERE podcast_id = $1 ORDER BY id")
            .bind(podcast_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load episodes", e))
    }
}

#[async_trait]
impl PodcastStore for PodcastRepository {
    async fn find_all(&self) -> AppResult<Vec<Podcast>> {
        sqlx::query_as::<_, Podcast>("SELECT * FROM podcasts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list podcasts", e))
    }

    async fn find_by_id(
        &self,
        id: PodcastId,
        with_episodes: bool,
    ) -> AppResult<Option<Podcast>> {
        let podcast = sqlx::query_as::<_, Podcast>("SELECT * FROM podcasts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find podcast by id", e)
            })?;

        match podcast {
            Some(mut podcast) if with_episodes => {
                podcast.episodes = self.load_episodes(id).await?;
                Ok(Some(podcast))
            }
            other => Ok(other),
        }
    }

    async fn create(&self, data: CreatePodcast) -> AppResult<Podcast> {
        sqlx::query_as::<_, Podcast>(
            "INSERT INTO podcasts (title, category) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create podcast", e))
    }

    async fn save(&self, podcast: Podcast) -> AppResult<Podcast> {
        let mut saved = sqlx::query_as::<_, Podcast>(
            "UPDATE podcasts SET title = $2, category = $3, rating = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(podcast.id)
        .bind(&podcast.title)
        .bind(&podcast.category)
        .bind(podcast.rating)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update podcast", e))?
        .ok_or_else(|| AppError::not_found(format!("Podcast {} not found", podcast.id)))?;

        saved.episodes = podcast.episodes;
        Ok(saved)
    }

    async fn delete(&self, id: PodcastId) -> AppResult<()> {
        sqlx::query("DELETE FROM podcasts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete podcast", e))?;
        Ok(())
    }
}
