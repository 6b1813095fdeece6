//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use podcast_auth::JwtService;
use podcast_core::config::AppConfig;
use podcast_core::traits::PasswordHashing;
use podcast_database::Stores;
use podcast_service::{PodcastService, UserService};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Backing stores.
    pub stores: Stores,
    /// Token issuing and validation.
    pub jwt: Arc<JwtService>,
    /// Account operations.
    pub user_service: Arc<UserService>,
    /// Podcast and episode operations.
    pub podcast_service: Arc<PodcastService>,
}

impl AppState {
    /// Wire services over `stores`.
    pub fn new(config: AppConfig, stores: Stores, hasher: Arc<dyn PasswordHashing>) -> Self {
        let jwt = Arc::new(JwtService::new(&config.auth));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            hasher,
            Arc::clone(&jwt),
        ));
        let podcast_service = Arc::new(PodcastService::new(
            Arc::clone(&stores.podcasts),
            Arc::clone(&stores.episodes),
        ));

        Self {
            config: Arc::new(config),
            stores,
            jwt,
            user_service,
            podcast_service,
        }
    }
}
