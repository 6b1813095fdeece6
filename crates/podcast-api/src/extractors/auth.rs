//! `AuthUser` extractor: reads the token, validates it and loads the user.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use podcast_auth::jwt::service::INVALID_TOKEN_MESSAGE;
use podcast_core::error::{AppError, ErrorKind};
use podcast_entity::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Alternate header carrying the raw token.
pub const TOKEN_HEADER: &str = "x-jwt";

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or_else(|| AppError::authentication("Missing authentication token"))?;

        let claims = state.jwt.validate(token)?;

        let user = state
            .user_service
            .find_by_id(claims.user_id())
            .await
            .map_err(|e| match e.kind {
                ErrorKind::NotFound => AppError::authentication(INVALID_TOKEN_MESSAGE),
                _ => e,
            })?;

        Ok(AuthUser(user))
    }
}

/// `Authorization: Bearer <token>` wins over the `x-jwt` header.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    bearer
        .or_else(|| headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
