//! Podcast domain entities.

pub mod model;
pub mod rating;

pub use model::{CreatePodcast, Podcast, UpdatePodcast};
pub use rating::{MAX_RATING, MIN_RATING, validate_rating};
