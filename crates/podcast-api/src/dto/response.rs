//! Response payloads, flattened next to `ok` in the outcome body.

use serde::{Deserialize, Serialize};

use podcast_entity::{Episode, Podcast, User};

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the backing database answered.
    pub database: bool,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed token for the `Authorization` or `x-jwt` header.
    pub token: String,
}

/// Id of a newly created row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The new id.
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastsResponse {
    pub podcasts: Vec<Podcast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastResponse {
    pub podcast: Podcast,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeResponse {
    pub episode: Episode,
}
