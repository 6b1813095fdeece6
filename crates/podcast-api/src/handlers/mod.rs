//! Route handlers organized by domain.

pub mod auth;
pub mod episode;
pub mod health;
pub mod podcast;
pub mod user;
