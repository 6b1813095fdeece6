//! Store traits the service layer is written against.
//!
//! Each trait mirrors the small persistence surface the services need:
//! lookups that return `None` for missing rows, one "or fail" lookup,
//! create, save and delete. Implementations live in
//! [`crate::repositories`] (PostgreSQL) and [`crate::memory`].

use async_trait::async_trait;

use podcast_core::result::AppResult;
use podcast_core::types::{EpisodeId, PodcastId, UserId};
use podcast_entity::{
    CreateEpisode, CreatePodcast, Episode, NewUser, Podcast, User, UserLookup,
};

/// Persistence for user accounts.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str, lookup: UserLookup) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by primary key, failing with `NotFound` if absent.
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Insert a new user. The plaintext password is hashed before insert.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Persist changes to an existing user, hashing any pending password.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// Persistence for podcasts.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait PodcastStore: Send + Sync {
    /// All podcasts ordered by id, without episodes.
    async fn find_all(&self) -> AppResult<Vec<Podcast>>;

    /// Find a podcast, optionally loading its episodes.
    async fn find_by_id(&self, id: PodcastId, with_episodes: bool)
    -> AppResult<Option<Podcast>>;

    /// Insert a new podcast.
    async fn create(&self, data: CreatePodcast) -> AppResult<Podcast>;

    /// Persist changes to an existing podcast.
    async fn save(&self, podcast: Podcast) -> AppResult<Podcast>;

    /// Delete a podcast and, through the cascade, its episodes.
    async fn delete(&self, id: PodcastId) -> AppResult<()>;
}

/// Persistence for episodes.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait EpisodeStore: Send + Sync {
    /// Insert a new episode under `podcast_id`.
    async fn create(&self, podcast_id: PodcastId, data: CreateEpisode) -> AppResult<Episode>;

    /// Persist changes to an existing episode.
    async fn save(&self, episode: Episode) -> AppResult<Episode>;

    /// Delete an episode by id.
    async fn delete(&self, id: EpisodeId) -> AppResult<()>;
}
