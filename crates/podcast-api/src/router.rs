//! Route definitions for the podcast HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to every handler via Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use podcast_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route and the shared state.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(podcast_routes())
        .merge(episode_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create_account))
        .route(
            "/users/me",
            get(handlers::user::me).patch(handlers::user::edit_profile),
        )
        .route("/users/{id}", get(handlers::user::user_profile))
}

fn podcast_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/podcasts",
            get(handlers::podcast::list_podcasts).post(handlers::podcast::create_podcast),
        )
        .route(
            "/podcasts/{id}",
            get(handlers::podcast::get_podcast)
                .patch(handlers::podcast::update_podcast)
                .delete(handlers::podcast::delete_podcast),
        )
}

fn episode_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/podcasts/{id}/episodes",
            get(handlers::episode::list_episodes).post(handlers::episode::create_episode),
        )
        .route(
            "/podcasts/{id}/episodes/{episode_id}",
            get(handlers::episode::get_episode)
                .patch(handlers::episode::update_episode)
                .delete(handlers::episode::delete_episode),
        )
}

async fn route_not_found() -> ApiError {
    ApiError(AppError::not_found("Route not found"))
}
