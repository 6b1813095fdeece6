//! # podcast-entity
//!
//! Domain entity models for the podcast backend. Every struct in this
//! crate represents a database row or a create/update payload. Row
//! entities derive `sqlx::FromRow`.

pub mod episode;
pub mod podcast;
pub mod user;

pub use episode::{CreateEpisode, Episode, UpdateEpisode};
pub use podcast::{CreatePodcast, Podcast, UpdatePodcast};
pub use user::{EditProfile, NewUser, User, UserLookup, UserRole};
