//! Podcast entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use podcast_core::result::AppResult;
use podcast_core::types::{EpisodeId, PodcastId};

use super::rating::validate_rating;
use crate::episode::Episode;

/// A podcast and, when loaded, its episodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Podcast {
    /// Unique podcast identifier.
    pub id: PodcastId,
    /// Display title.
    pub title: String,
    /// Free-form category label.
    pub category: String,
    /// Listener rating, unset until someone rates the podcast.
    pub rating: Option<i32>,
    /// When the podcast was created.
    pub created_at: DateTime<Utc>,
    /// When the podcast was last updated.
    pub updated_at: DateTime<Utc>,
    /// Episodes, ordered by id. Empty unless explicitly loaded.
    #[serde(default)]
    #[sqlx(skip)]
    pub episodes: Vec<Episode>,
}

impl Podcast {
    /// Find an episode of this podcast by id.
    pub fn episode(&self, episode_id: EpisodeId) -> Option<&Episode> {
        self.episodes.iter().find(|episode| episode.id == episode_id)
    }
}

/// Data required to create a podcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePodcast {
    /// Display title.
    pub title: String,
    /// Category label.
    pub category: String,
}

/// Partial podcast update. Only supplied fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePodcast {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New category.
    #[serde(default)]
    pub category: Option<String>,
    /// New rating, must be within 1..=5.
    #[serde(default)]
    pub rating: Option<i32>,
}

impl UpdatePodcast {
    /// Check the payload before anything is merged.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    /// Merge the supplied fields into `podcast`.
    pub fn apply_to(self, podcast: &mut Podcast) {
        if let Some(title) = self.title {
            podcast.title = title;
        }
        if let Some(category) = self.category {
            podcast.category = category;
        }
        if let Some(rating) = self.rating {
            podcast.rating = Some(rating);
        }
    }
}
