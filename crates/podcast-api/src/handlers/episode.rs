//! Episode handlers, nested under their podcast.

use axum::Json;
use axum::extract::State;

use podcast_core::types::outcome::Outcome;
use podcast_core::types::{EpisodeId, PodcastId};
use podcast_entity::{CreateEpisode, UpdateEpisode};

use crate::dto::response::{CreatedResponse, EpisodeResponse, EpisodesResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PathParams};
use crate::middleware::rbac::require_host;
use crate::state::AppState;

/// GET /api/podcasts/{id}/episodes
pub async fn list_episodes(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> ApiResult<EpisodesResponse> {
    let episodes = state.podcast_service.get_episodes(PodcastId::new(id)).await?;
    Ok(Json(Outcome::success(EpisodesResponse { episodes })))
}

/// POST /api/podcasts/{id}/episodes
pub async fn create_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i64>,
    JsonBody(data): JsonBody<CreateEpisode>,
) -> ApiResult<CreatedResponse> {
    require_host(&auth)?;
    let episode_id = state
        .podcast_service
        .create_episode(PodcastId::new(id), data)
        .await?;
    Ok(Json(Outcome::success(CreatedResponse {
        id: episode_id.value(),
    })))
}

/// GET /api/podcasts/{id}/episodes/{episode_id}
pub async fn get_episode(
    State(state): State<AppState>,
    PathParams((id, episode_id)): PathParams<(i64, i64)>,
) -> ApiResult<EpisodeResponse> {
    let episode = state
        .podcast_service
        .get_episode(PodcastId::new(id), EpisodeId::new(episode_id))
        .await?;
    Ok(Json(Outcome::success(EpisodeResponse { episode })))
}

/// PATCH /api/podcasts/{id}/episodes/{episode_id}
pub async fn update_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams((id, episode_id)): PathParams<(i64, i64)>,
    JsonBody(changes): JsonBody<UpdateEpisode>,
) -> ApiResult<()> {
    require_host(&auth)?;
    state
        .podcast_service
        .update_episode(PodcastId::new(id), EpisodeId::new(episode_id), changes)
        .await?;
    Ok(Json(Outcome::empty()))
}

/// DELETE /api/podcasts/{id}/episodes/{episode_id}
pub async fn delete_episode(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams((id, episode_id)): PathParams<(i64, i64)>,
) -> ApiResult<()> {
    require_host(&auth)?;
    state
        .podcast_service
        .delete_episode(PodcastId::new(id), EpisodeId::new(episode_id))
        .await?;
    Ok(Json(Outcome::empty()))
}
