//! Episode domain entities.

pub mod model;

pub use model::{CreateEpisode, Episode, UpdateEpisode};
