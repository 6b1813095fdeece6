//! Mapping of store failures to caller-facing errors.

use tracing::error;

use podcast_core::error::AppError;

/// Log `cause` and hide it behind `message`.
pub(crate) fn infrastructure(message: impl Into<String>, cause: AppError) -> AppError {
    let message = message.into();
    error!(error = %cause, "{message}");
    AppError::infrastructure(message, cause)
}
