//! # podcast-database
//!
//! Persistence for the podcast backend: the store traits services depend
//! on, PostgreSQL repositories built on sqlx, an in-memory provider for
//! development and tests, and the pool/schema setup.

pub mod memory;
mod postgres;
pub mod provider;
pub mod repositories;
pub mod store;

pub use provider::Stores;
pub use store::{EpisodeStore, PodcastStore, UserStore};

#[cfg(any(test, feature = "mock"))]
pub use store::{MockEpisodeStore, MockPodcastStore, MockUserStore};
