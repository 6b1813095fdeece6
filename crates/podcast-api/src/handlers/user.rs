//! Account handlers: sign-up and profiles.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use podcast_core::types::UserId;
use podcast_core::types::outcome::Outcome;

use crate::dto::request::{CreateAccountRequest, EditProfileRequest};
use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody, PathParams};
use crate::state::AppState;

/// POST /api/users
pub async fn create_account(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateAccountRequest>,
) -> ApiResult<()> {
    req.validate()?;
    state.user_service.create_account(req.into()).await?;
    Ok(Json(Outcome::empty()))
}

/// GET /api/users/me
pub async fn me(AuthUser(user): AuthUser) -> ApiResult<UserResponse> {
    Ok(Json(Outcome::success(UserResponse { user })))
}

/// PATCH /api/users/me
pub async fn edit_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<EditProfileRequest>,
) -> ApiResult<()> {
    req.validate()?;
    state.user_service.edit_profile(auth.id, req.into()).await?;
    Ok(Json(Outcome::empty()))
}

/// GET /api/users/{id}
pub async fn user_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    PathParams(id): PathParams<i64>,
) -> ApiResult<UserResponse> {
    let user = state.user_service.find_by_id(UserId::new(id)).await?;
    Ok(Json(Outcome::success(UserResponse { user })))
}
