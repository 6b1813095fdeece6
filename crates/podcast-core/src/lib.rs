//! # podcast-core
//!
//! Core crate for the podcast backend. Contains the unified error system,
//! the `{ok, error}` outcome shape returned to clients, typed numeric
//! identifiers, configuration schemas, and the password hashing seam
//! shared by the persistence and auth crates.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::outcome::Outcome;
