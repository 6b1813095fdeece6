//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use podcast_core::result::AppResult;
use podcast_core::traits::PasswordHashing;
use podcast_core::types::UserId;

use super::role::UserRole;

/// A registered account.
///
/// `password_hash` is only populated when the row was loaded with
/// [`UserLookup::WithPassword`]; the default projection leaves it out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique email address, compared as stored.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    #[sqlx(default)]
    pub password_hash: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Whether the email address has been verified.
    pub verified: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Plaintext set through [`User::set_password`], hashed before save.
    #[serde(skip)]
    #[sqlx(skip)]
    pending_password: Option<String>,
}

impl User {
    /// Build an unverified user with no loaded password hash.
    pub fn new(id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            password_hash: None,
            role,
            verified: false,
            created_at: now,
            updated_at: now,
            pending_password: None,
        }
    }

    /// Attach an already computed password hash.
    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    /// Copy of this user as the default projection returns it.
    pub fn without_password_hash(&self) -> Self {
        Self {
            password_hash: None,
            pending_password: None,
            ..self.clone()
        }
    }

    /// Replace the password. The store hashes it right before persisting.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.pending_password = Some(password.into());
    }

    /// Whether a new plaintext password is waiting to be hashed.
    pub fn has_pending_password(&self) -> bool {
        self.pending_password.is_some()
    }

    /// Hash the pending plaintext password, if any, into `password_hash`.
    ///
    /// Called by every store immediately before writing the row.
    pub fn hash_pending_password(&mut self, hasher: &dyn PasswordHashing) -> AppResult<()> {
        if let Some(plain) = self.pending_password.take() {
            self.password_hash = Some(hasher.hash_password(&plain)?);
        }
        Ok(())
    }

    /// Check `password` against the stored hash.
    ///
    /// Returns `Ok(false)` when the hash was not loaded.
    pub fn check_password(&self, password: &str, hasher: &dyn PasswordHashing) -> AppResult<bool> {
        match &self.password_hash {
            Some(hash) => hasher.verify_password(password, hash),
            None => Ok(false),
        }
    }
}

/// Which columns a user lookup should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserLookup {
    /// Every column except the password hash.
    #[default]
    Default,
    /// Include the password hash (login only).
    WithPassword,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed by the store before insert.
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Partial profile update. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditProfile {
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New plaintext password.
    #[serde(default)]
    pub password: Option<String>,
}

impl EditProfile {
    /// Merge the supplied fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.set_password(password);
        }
    }
}
