//! Podcast rating bounds.

use podcast_core::error::AppError;

/// Lowest rating a podcast can hold.
pub const MIN_RATING: i32 = 1;

/// Highest rating a podcast can hold.
pub const MAX_RATING: i32 = 5;

/// Reject ratings outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), AppError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}."
        )))
    }
}
