//! Podcast and episode CRUD, each operation guarded by an existence lookup.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use podcast_core::error::{AppError, INTERNAL_ERROR_MESSAGE};
use podcast_core::result::AppResult;
use podcast_core::types::{EpisodeId, PodcastId};
use podcast_database::{EpisodeStore, PodcastStore};
use podcast_entity::{CreateEpisode, CreatePodcast, Episode, Podcast, UpdateEpisode, UpdatePodcast};

use crate::failure::infrastructure;

/// Handles podcasts and their episodes.
#[derive(Clone)]
pub struct PodcastService {
    podcasts: Arc<dyn PodcastStore>,
    episodes: Arc<dyn EpisodeStore>,
}

impl fmt::Debug for PodcastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PodcastService").finish_non_exhaustive()
    }
}

impl PodcastService {
    /// Creates a new podcast service.
    pub fn new(podcasts: Arc<dyn PodcastStore>, episodes: Arc<dyn EpisodeStore>) -> Self {
        Self { podcasts, episodes }
    }

    /// Lists every podcast, without episodes.
    pub async fn get_all_podcasts(&self) -> AppResult<Vec<Podcast>> {
        self.podcasts.find_all().await.map_err(internal)
    }

    /// Creates a podcast and returns its id.
    pub async fn create_podcast(&self, data: CreatePodcast) -> AppResult<PodcastId> {
        let podcast = self.podcasts.create(data).await.map_err(internal)?;
        info!(podcast_id = %podcast.id, "Podcast created");
        Ok(podcast.id)
    }

    /// Loads a podcast together with its episodes.
    pub async fn get_podcast(&self, id: PodcastId) -> AppResult<Podcast> {
        self.find_podcast(id, true).await
    }

    /// Deletes a podcast. Its episodes go with it.
    pub async fn delete_podcast(&self, id: PodcastId) -> AppResult<()> {
        self.find_podcast(id, false).await?;
        self.podcasts.delete(id).await.map_err(internal)?;
        info!(podcast_id = %id, "Podcast deleted");
        Ok(())
    }

    /// Applies the supplied fields to a podcast.
    ///
    /// An out-of-range rating is rejected before anything is saved.
    pub async fn update_podcast(&self, id: PodcastId, changes: UpdatePodcast) -> AppResult<()> {
        let mut podcast = self.find_podcast(id, false).await?;
        changes.validate()?;
        changes.apply_to(&mut podcast);
        self.podcasts.save(podcast).await.map_err(internal)?;
        Ok(())
    }

    /// Lists the episodes of a podcast.
    pub async fn get_episodes(&self, podcast_id: PodcastId) -> AppResult<Vec<Episode>> {
        Ok(self.get_podcast(podcast_id).await?.episodes)
    }

    /// Finds one episode within a podcast.
    pub async fn get_episode(
        &self,
        podcast_id: PodcastId,
        episode_id: EpisodeId,
    ) -> AppResult<Episode> {
        self.get_podcast(podcast_id)
            .await?
            .episode(episode_id)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Episode with id {episode_id} not found in podcast with id {podcast_id}"
                ))
            })
    }

    /// Adds an episode to a podcast and returns its id.
    pub async fn create_episode(
        &self,
        podcast_id: PodcastId,
        data: CreateEpisode,
    ) -> AppResult<EpisodeId> {
        self.find_podcast(podcast_id, false).await?;
        let episode = self
            .episodes
            .create(podcast_id, data)
            .await
            .map_err(internal)?;
        info!(podcast_id = %podcast_id, episode_id = %episode.id, "Episode created");
        Ok(episode.id)
    }

    /// Deletes an episode of a podcast.
    pub async fn delete_episode(
        &self,
        podcast_id: PodcastId,
        episode_id: EpisodeId,
    ) -> AppResult<()> {
        let episode = self.get_episode(podcast_id, episode_id).await?;
        self.episodes.delete(episode.id).await.map_err(internal)?;
        info!(podcast_id = %podcast_id, episode_id = %episode_id, "Episode deleted");
        Ok(())
    }

    /// Merges the supplied fields into an existing episode.
    pub async fn update_episode(
        &self,
        podcast_id: PodcastId,
        episode_id: EpisodeId,
        changes: UpdateEpisode,
    ) -> AppResult<()> {
        let mut episode = self.get_episode(podcast_id, episode_id).await?;
        changes.apply_to(&mut episode);
        self.episodes.save(episode).await.map_err(internal)?;
        Ok(())
    }

    async fn find_podcast(&self, id: PodcastId, with_episodes: bool) -> AppResult<Podcast> {
        self.podcasts
            .find_by_id(id, with_episodes)
            .await
            .map_err(internal)?
            .ok_or_else(|| AppError::not_found(format!("Podcast with id {id} not found")))
    }
}

fn internal(cause: AppError) -> AppError {
    infrastructure(INTERNAL_ERROR_MESSAGE, cause)
}
