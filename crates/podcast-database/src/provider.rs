//! Store bundle that dispatches to the configured database provider.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use podcast_core::config::{DatabaseConfig, DatabaseProvider};
use podcast_core::result::AppResult;
use podcast_core::traits::PasswordHashing;

use crate::memory::MemoryDatabase;
use crate::postgres;
use crate::repositories::{EpisodeRepository, PodcastRepository, UserRepository};
use crate::store::{EpisodeStore, PodcastStore, UserStore};

/// The three stores the services run against.
///
/// The provider is selected at construction time based on configuration.
#[derive(Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Podcasts.
    pub podcasts: Arc<dyn PodcastStore>,
    /// Episodes.
    pub episodes: Arc<dyn EpisodeStore>,
    /// Backing pool, absent for the in-memory provider.
    pool: Option<PgPool>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

impl Stores {
    /// Build the stores for the configured provider.
    pub async fn connect(
        config: &DatabaseConfig,
        hasher: Arc<dyn PasswordHashing>,
    ) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL stores");
                let pool = postgres::open_pool(config).await?;
                Ok(Self::postgres(pool, hasher))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory stores");
                Ok(Self::memory(hasher))
            }
        }
    }

    /// Stores over a fresh in-memory database.
    pub fn memory(hasher: Arc<dyn PasswordHashing>) -> Self {
        let db = MemoryDatabase::new();
        Self {
            users: Arc::new(db.users(hasher)),
            podcasts: Arc::new(db.podcasts()),
            episodes: Arc::new(db.episodes()),
            pool: None,
        }
    }

    /// Stores over an existing PostgreSQL pool.
    pub fn postgres(pool: PgPool, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone(), hasher)),
            podcasts: Arc::new(PodcastRepository::new(pool.clone())),
            episodes: Arc::new(EpisodeRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Check connectivity of the backing database.
    ///
    /// The in-memory provider is always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => postgres::ping(pool).await,
            None => Ok(true),
        }
    }

    /// Close the backing pool, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Podcast database pool closed");
        }
    }
}
