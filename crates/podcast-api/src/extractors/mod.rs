//! Custom Axum extractors.

pub mod auth;
pub mod input;

pub use auth::AuthUser;
pub use input::{JsonBody, PathParams};
