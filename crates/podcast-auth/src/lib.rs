//! # podcast-auth
//!
//! Token and credential primitives for the podcast backend.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token issuing and validation for a numeric user id
//! - `password`: Argon2id password hashing behind the core `PasswordHashing` trait

pub mod jwt;
pub mod password;

pub use jwt::{JwtService, TokenClaims};
pub use password::PasswordHasher;
