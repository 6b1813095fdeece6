//! # podcast-service
//!
//! Business logic for the podcast backend. Each service runs at most one
//! guard lookup, delegates to a store and maps every failure into an
//! [`AppError`](podcast_core::AppError) whose message is safe to return
//! to callers.
//!
//! Services follow constructor injection: stores, the password hasher and
//! the token service are provided at construction time via `Arc`.

mod failure;
pub mod podcast;
pub mod user;

pub use podcast::PodcastService;
pub use user::UserService;
