//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for backend operations.
///
/// Every service method returns this instead of panicking, so failures
/// always reach the caller as a value.
pub type AppResult<T> = Result<T, AppError>;
