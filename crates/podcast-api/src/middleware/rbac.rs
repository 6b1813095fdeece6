//! Role checks for mutating routes.

use podcast_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated user is a host.
pub fn require_host(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.role.is_host() {
        return Err(AppError::authorization(
            "Only hosts can manage podcasts and episodes",
        ));
    }
    Ok(())
}
