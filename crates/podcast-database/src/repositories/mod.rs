//! PostgreSQL repository implementations of the store traits.

pub mod episode;
pub mod podcast;
pub mod user;

pub use episode::EpisodeRepository;
pub use podcast::PodcastRepository;
pub use user::UserRepository;
