//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use podcast_core::error::{AppError, ErrorKind};
use podcast_core::result::AppResult;
use podcast_core::traits::PasswordHashing;
use podcast_core::types::UserId;
use podcast_entity::{NewUser, User, UserLookup};

use crate::store::UserStore;

/// Columns returned by the default projection (no password hash).
const USER_COLUMNS: &str = "id, email, role, verified, created_at, updated_at";

/// Columns returned when the password hash is explicitly requested.
const USER_COLUMNS_WITH_PASSWORD: &str =
    "id, email, password_hash, role, verified, created_at, updated_at";

/// Repository for user persistence.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
    hasher: Arc<dyn PasswordHashing>,
}

impl std::fmt::Debug for UserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepository").finish_non_exhaustive()
    }
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { pool, hasher }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str, lookup: UserLookup) -> AppResult<Option<User>> {
        let columns = match lookup {
            UserLookup::Default => USER_COLUMNS,
            UserLookup::WithPassword => USER_COLUMNS_WITH_PASSWORD,
        };

        sqlx::query_as::<_, User>(&format!("SELECT {columns} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let password_hash = self.hasher.hash_password(&data.password)?;

        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&data.email)
        .bind(&password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.hash_pending_password(self.hasher.as_ref())?;

        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET email = $2, \
                              password_hash = COALESCE($3, password_hash), \
                              role = $4, \
                              verified = $5, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(user.verified)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))
    }
}
