//! Episode entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use podcast_core::types::{EpisodeId, PodcastId};

/// A single episode belonging to a podcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Episode {
    /// Unique episode identifier.
    pub id: EpisodeId,
    /// Display title.
    pub title: String,
    /// Category label.
    pub category: String,
    /// Owning podcast.
    pub podcast_id: PodcastId,
    /// When the episode was created.
    pub created_at: DateTime<Utc>,
    /// When the episode was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEpisode {
    /// Display title.
    pub title: String,
    /// Category label.
    pub category: String,
}

/// Partial episode update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEpisode {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New category.
    #[serde(default)]
    pub category: Option<String>,
}

impl UpdateEpisode {
    /// Merge the supplied fields into `episode`.
    pub fn apply_to(self, episode: &mut Episode) {
        if let Some(title) = self.title {
            episode.title = title;
        }
        if let Some(category) = self.category {
            episode.category = category;
        }
    }
}
