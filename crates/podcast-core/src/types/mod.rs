//! Core type definitions used across the workspace.

pub mod id;
pub mod outcome;

pub use id::*;
pub use outcome::Outcome;
