//! In-memory podcast and episode stores.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use podcast_core::error::AppError;
use podcast_core::result::AppResult;
use podcast_core::types::{EpisodeId, PodcastId};
use podcast_entity::{CreateEpisode, CreatePodcast, Episode, Podcast};

use super::Tables;
use crate::store::{EpisodeStore, PodcastStore};

/// Podcast store over the shared in-memory tables.
#[derive(Debug, Clone)]
pub struct MemoryPodcastRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryPodcastRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl PodcastStore for MemoryPodcastRepository {
    async fn find_all(&self) -> AppResult<Vec<Podcast>> {
        let tables = self.tables.read().await;
        Ok(tables.podcasts.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: PodcastId,
        with_episodes: bool,
    ) -> AppResult<Option<Podcast>> {
        let tables = self.tables.read().await;
        let Some(podcast) = tables.podcasts.get(&id) else {
            return Ok(None);
        };

        let mut podcast = podcast.clone();
        if with_episodes {
            podcast.episodes = tables
                .episodes
                .values()
                .filter(|episode| episode.podcast_id == id)
                .cloned()
                .collect();
        }
        Ok(Some(podcast))
    }

    async fn create(&self, data: CreatePodcast) -> AppResult<Podcast> {
        let mut tables = self.tables.write().await;
        let id = tables.next_podcast_id();
        let now = Utc::now();
        let podcast = Podcast {
            id,
            title: data.title,
            category: data.category,
            rating: None,
            created_at: now,
            updated_at: now,
            episodes: Vec::new(),
        };
        tables.podcasts.insert(id, podcast.clone());
        Ok(podcast)
    }

    async fn save(&self, podcast: Podcast) -> AppResult<Podcast> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .podcasts
            .get_mut(&podcast.id)
            .ok_or_else(|| AppError::not_found(format!("Podcast {} not found", podcast.id)))?;

        stored.title = podcast.title;
        stored.category = podcast.category;
        stored.rating = podcast.rating;
        stored.updated_at = Utc::now();

        let mut saved = stored.clone();
        saved.episodes = podcast.episodes;
        Ok(saved)
    }

    async fn delete(&self, id: PodcastId) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables.podcasts.remove(&id);
        tables.episodes.retain(|_, episode| episode.podcast_id != id);
        Ok(())
    }
}

/// Episode store over the shared in-memory tables.
#[derive(Debug, Clone)]
pub struct MemoryEpisodeRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryEpisodeRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl EpisodeStore for MemoryEpisodeRepository {
    async fn create(&self, podcast_id: PodcastId, data: CreateEpisode) -> AppResult<Episode> {
        let mut tables = self.tables.write().await;
        if !tables.podcasts.contains_key(&podcast_id) {
            return Err(AppError::database(format!(
                "episodes.podcast_id references missing podcast {podcast_id}"
            )));
        }

        let id = tables.next_episode_id();
        let now = Utc::now();
        let episode = Episode {
            id,
            title: data.title,
            category: data.category,
            podcast_id,
            created_at: now,
            updated_at: now,
        };
        tables.episodes.insert(id, episode.clone());
        Ok(episode)
    }

    async fn save(&self, episode: Episode) -> AppResult<Episode> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .episodes
            .get_mut(&episode.id)
            .ok_or_else(|| AppError::not_found(format!("Episode {} not found", episode.id)))?;

        stored.title = episode.title;
        stored.category = episode.category;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: EpisodeId) -> AppResult<()> {
        self.tables.write().await.episodes.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDatabase;

    fn create_podcast(title: &str) -> CreatePodcast {
        CreatePodcast {
            title: title.to_string(),
            category: "Tech".to_string(),
        }
    }

    fn create_episode(title: &str) -> CreateEpisode {
        CreateEpisode {
            title: title.to_string(),
            category: "Interview".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let db = MemoryDatabase::new();
        let first = db.podcasts().create(create_podcast("a")).await.unwrap();
        let second = db.podcasts().create(create_podcast("b")).await.unwrap();
        assert_eq!(first.id, PodcastId::new(1));
        assert_eq!(second.id, PodcastId::new(2));
    }

    #[tokio::test]
    async fn test_episodes_only_loaded_on_request() {
        let db = MemoryDatabase::new();
        let podcast = db.podcasts().create(create_podcast("a")).await.unwrap();
        db.episodes()
            .create(podcast.id, create_episode("pilot"))
            .await
            .unwrap();

        let bare = db.podcasts().find_by_id(podcast.id, false).await.unwrap().unwrap();
        assert!(bare.episodes.is_empty());

        let full = db.podcasts().find_by_id(podcast.id, true).await.unwrap().unwrap();
        assert_eq!(full.episodes.len(), 1);
        assert_eq!(full.episodes[0].title, "pilot");
    }

    #[tokio::test]
    async fn test_delete_podcast_cascades_to_episodes() {
        let db = MemoryDatabase::new();
        let keep = db.podcasts().create(create_podcast("keep")).await.unwrap();
        let drop = db.podcasts().create(create_podcast("drop")).await.unwrap();
        db.episodes().create(keep.id, create_episode("k")).await.unwrap();
        db.episodes().create(drop.id, create_episode("d")).await.unwrap();

        db.podcasts().delete(drop.id).await.unwrap();

        assert!(db.podcasts().find_by_id(drop.id, true).await.unwrap().is_none());
        let kept = db.podcasts().find_by_id(keep.id, true).await.unwrap().unwrap();
        assert_eq!(kept.episodes.len(), 1);
    }

    #[tokio::test]
    async fn test_episode_requires_existing_podcast() {
        let db = MemoryDatabase::new();
        let err = db
            .episodes()
            .create(PodcastId::new(42), create_episode("orphan"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, podcast_core::error::ErrorKind::Database);
    }
}
