//! In-memory store implementations.
//!
//! Suitable for development and tests only: data lives in process-local
//! maps behind a Tokio `RwLock` and is lost on restart. The three stores
//! share one [`MemoryDatabase`] so that podcast deletion cascades to
//! episodes exactly like the PostgreSQL foreign key does.

mod content;
mod user;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use podcast_core::traits::PasswordHashing;
use podcast_core::types::{EpisodeId, PodcastId, UserId};
use podcast_entity::{Episode, Podcast, User};

pub use content::{MemoryEpisodeRepository, MemoryPodcastRepository};
pub use user::MemoryUserRepository;

/// Rows held by the in-memory database.
#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    podcasts: BTreeMap<PodcastId, Podcast>,
    episodes: BTreeMap<EpisodeId, Episode>,
    last_user_id: i64,
    last_podcast_id: i64,
    last_episode_id: i64,
}

impl Tables {
    fn next_user_id(&mut self) -> UserId {
        self.last_user_id += 1;
        UserId::new(self.last_user_id)
    }

    fn next_podcast_id(&mut self) -> PodcastId {
        self.last_podcast_id += 1;
        PodcastId::new(self.last_podcast_id)
    }

    fn next_episode_id(&mut self) -> EpisodeId {
        self.last_episode_id += 1;
        EpisodeId::new(self.last_episode_id)
    }
}

/// Shared in-memory database handing out the three stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Creates an empty in-memory database. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// User store backed by this database.
    pub fn users(&self, hasher: Arc<dyn PasswordHashing>) -> MemoryUserRepository {
        MemoryUserRepository::new(Arc::clone(&self.tables), hasher)
    }

    /// Podcast store backed by this database.
    pub fn podcasts(&self) -> MemoryPodcastRepository {
        MemoryPodcastRepository::new(Arc::clone(&self.tables))
    }

    /// Episode store backed by this database.
    pub fn episodes(&self) -> MemoryEpisodeRepository {
        MemoryEpisodeRepository::new(Arc::clone(&self.tables))
    }
}
