//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use podcast_core::error::AppError;
use podcast_core::result::AppResult;
use podcast_core::traits::PasswordHashing;
use podcast_core::types::UserId;
use podcast_entity::{NewUser, User, UserLookup};

use super::Tables;
use crate::store::UserStore;

/// User store over the shared in-memory tables.
#[derive(Clone)]
pub struct MemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
    hasher: Arc<dyn PasswordHashing>,
}

impl std::fmt::Debug for MemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserRepository").finish_non_exhaustive()
    }
}

impl MemoryUserRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>, hasher: Arc<dyn PasswordHashing>) -> Self {
        Self { tables, hasher }
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_email(&self, email: &str, lookup: UserLookup) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|user| user.email == email)
            .map(|user| match lookup {
                UserLookup::Default => user.without_password_hash(),
                UserLookup::WithPassword => user.clone(),
            }))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).map(User::without_password_hash))
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let password_hash = self.hasher.hash_password(&data.password)?;

        let mut tables = self.tables.write().await;
        if tables.users.values().any(|user| user.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        let id = tables.next_user_id();
        let user = User::new(id, data.email, data.role).with_password_hash(password_hash);
        let projected = user.without_password_hash();
        tables.users.insert(id, user);
        Ok(projected)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.hash_pending_password(self.hasher.as_ref())?;

        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|other| other.id != user.id && other.email == user.email)
        {
            return Err(AppError::conflict("Email already in use"));
        }

        let stored = tables
            .users
            .get_mut(&user.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))?;

        stored.email = user.email;
        if let Some(hash) = user.password_hash {
            stored.password_hash = Some(hash);
        }
        stored.role = user.role;
        stored.verified = user.verified;
        stored.updated_at = Utc::now();

        Ok(stored.without_password_hash())
    }
}
