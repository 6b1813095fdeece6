//! # podcast-api
//!
//! HTTP API layer for the podcast backend built on Axum.
//!
//! Every response body is an `{ok, error}` outcome: successes flatten
//! their payload next to `ok`, failures carry the error message and an
//! HTTP status derived from the error kind.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
