//! Password hashing seam between persistence and auth.
//!
//! Stores re-hash a pending plaintext password right before writing a
//! user row. The concrete Argon2id hasher lives in `podcast-auth`, which
//! the persistence crate does not depend on.

use crate::result::AppResult;

/// One-way credential hashing.
pub trait PasswordHashing: Send + Sync + 'static {
    /// Hash a plaintext password into a self-describing hash string.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is
    /// unusable.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}
