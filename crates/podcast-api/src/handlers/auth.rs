//! Login handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use podcast_core::types::outcome::Outcome;

use crate::dto::request::LoginRequest;
use crate::dto::response::TokenResponse;
use crate::error::ApiResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<TokenResponse> {
    req.validate()?;
    let token = state.user_service.login(&req.email, &req.password).await?;
    Ok(Json(Outcome::success(TokenResponse { token })))
}
