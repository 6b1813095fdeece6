//! Podcast handlers. Reads are public, writes need a host.

use axum::Json;
use axum::extract::State;

use podcast_core::types::PodcastId;
use podcast_core::types::outcome::Outcome;
use podcast_entity::{CreatePodcast, UpdatePodcast};

use crate::dto::response::{CreatedResponse, PodcastResponse, PodcastsResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PathParams};
use crate::middleware::rbac::require_host;
use crate::state::AppState;

/// GET /api/podcasts
pub async fn list_podcasts(State(state): State<AppState>) -> ApiResult<PodcastsResponse> {
    let podcasts = state.podcast_service.get_all_podcasts().await?;
    Ok(Json(Outcome::success(PodcastsResponse { podcasts })))
}

/// POST /api/podcasts
pub async fn create_podcast(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(data): JsonBody<CreatePodcast>,
) -> ApiResult<CreatedResponse> {
    require_host(&auth)?;
    let id = state.podcast_service.create_podcast(data).await?;
    Ok(Json(Outcome::success(CreatedResponse { id: id.value() })))
}

/// GET /api/podcasts/{id}
pub async fn get_podcast(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> ApiResult<PodcastResponse> {
    let podcast = state.podcast_service.get_podcast(PodcastId::new(id)).await?;
    Ok(Json(Outcome::success(PodcastResponse { podcast })))
}

/// PATCH /api/podcasts/{id}
pub async fn update_podcast(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i64>,
    JsonBody(changes): JsonBody<UpdatePodcast>,
) -> ApiResult<()> {
    require_host(&auth)?;
    state
        .podcast_service
        .update_podcast(PodcastId::new(id), changes)
        .await?;
    Ok(Json(Outcome::empty()))
}

/// DELETE /api/podcasts/{id}
pub async fn delete_podcast(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i64>,
) -> ApiResult<()> {
    require_host(&auth)?;
    state.podcast_service.delete_podcast(PodcastId::new(id)).await?;
    Ok(Json(Outcome::empty()))
}
