//! JWT token issuing, validation, and claims.

pub mod claims;
pub mod service;

pub use claims::TokenClaims;
pub use service::JwtService;
