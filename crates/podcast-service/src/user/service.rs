//! Account operations: sign-up, login, lookup and profile edits.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use podcast_auth::JwtService;
use podcast_core::error::{AppError, ErrorKind, INTERNAL_ERROR_MESSAGE};
use podcast_core::result::AppResult;
use podcast_core::traits::PasswordHashing;
use podcast_core::types::UserId;
use podcast_database::UserStore;
use podcast_entity::{EditProfile, NewUser, User, UserLookup};

use crate::failure::infrastructure;

/// Returned when signing up with an email that is already registered.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "There is a user with that email already";
/// Returned when no account matches the lookup.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
/// Returned when the password does not match the stored hash.
pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password";
const CREATE_FAILED_MESSAGE: &str = "Could not create account";
const UPDATE_FAILED_MESSAGE: &str = "Could not update profile";

/// Handles account operations.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHashing>,
    jwt: Arc<JwtService>,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("jwt", &self.jwt)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHashing>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self { users, hasher, jwt }
    }

    /// Registers a new account unless the email is already taken.
    pub async fn create_account(&self, data: NewUser) -> AppResult<()> {
        let existing = self
            .users
            .find_by_email(&data.email, UserLookup::Default)
            .await
            .map_err(|e| infrastructure(CREATE_FAILED_MESSAGE, e))?;
        if existing.is_some() {
            return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let user = self
            .users
            .create(data)
            .await
            .map_err(|e| infrastructure(CREATE_FAILED_MESSAGE, e))?;

        info!(user_id = %user.id, role = %user.role, "Account created");
        Ok(())
    }

    /// Checks the credentials and returns a signed token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self
            .users
            .find_by_email(email, UserLookup::WithPassword)
            .await
            .map_err(surface_cause)?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND_MESSAGE))?;

        let matches = user
            .check_password(password, self.hasher.as_ref())
            .map_err(surface_cause)?;
        if !matches {
            return Err(AppError::authentication(WRONG_PASSWORD_MESSAGE));
        }

        let token = self.jwt.issue(user.id).map_err(surface_cause)?;
        info!(user_id = %user.id, "User logged in");
        Ok(token)
    }

    /// Loads a user by id.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<User> {
        self.users.get_by_id(id).await.map_err(|e| match e.kind {
            ErrorKind::NotFound => AppError::not_found(USER_NOT_FOUND_MESSAGE),
            _ => infrastructure(INTERNAL_ERROR_MESSAGE, e),
        })
    }

    /// Applies the supplied profile fields to the user.
    ///
    /// A new password is hashed by the store right before the row is written.
    pub async fn edit_profile(&self, id: UserId, changes: EditProfile) -> AppResult<()> {
        let mut user = self.find_by_id(id).await?;
        changes.apply_to(&mut user);

        self.users
            .save(user)
            .await
            .map_err(|e| infrastructure(UPDATE_FAILED_MESSAGE, e))?;

        info!(user_id = %id, "Profile updated");
        Ok(())
    }
}

/// Login reports the underlying failure's own message.
fn surface_cause(err: AppError) -> AppError {
    let message = err.message.clone();
    infrastructure(message, err)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use podcast_core::config::AuthConfig;
    use podcast_database::MockUserStore;
    use podcast_entity::UserRole;

    use super::*;

    struct PlainHasher;

    impl PasswordHashing for PlainHasher {
        fn hash_password(&self, password: &str) -> AppResult<String> {
            Ok(format!("hashed:{password}"))
        }

        fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: None,
        }))
    }

    fn service(store: MockUserStore) -> UserService {
        UserService::new(Arc::new(store), Arc::new(PlainHasher), jwt())
    }

    fn stored_user() -> User {
        User::new(UserId::new(1), "host@example.com", UserRole::Host).with_password_hash("hashed:pw")
    }

    fn sign_up() -> NewUser {
        NewUser {
            email: "host@example.com".to_string(),
            password: "pw".to_string(),
            role: UserRole::Host,
        }
    }

    #[tokio::test]
    async fn test_create_account_rejects_duplicate_without_creating() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email()
            .returning(|_, _| Ok(Some(stored_user().without_password_hash())));
        store.expect_create().never();

        let err = service(store).create_account(sign_up()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, DUPLICATE_EMAIL_MESSAGE);
    }

    #[tokio::test]
    async fn test_create_account_creates_new_user() {
        let mut store = MockUserStore::new();
        store.expect_find_by_email().returning(|_, _| Ok(None));
        store
            .expect_create()
            .withf(|data| data.email == "host@example.com" && data.password == "pw")
            .times(1)
            .returning(|_| Ok(stored_user().without_password_hash()));

        service(store).create_account(sign_up()).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_account_store_failure_is_generic() {
        let mut store = MockUserStore::new();
        store.expect_find_by_email().returning(|_, _| Ok(None));
        store
            .expect_create()
            .returning(|_| Err(AppError::database("connection reset")));

        let err = service(store).create_account(sign_up()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "Could not create account");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email()
            .withf(|email, lookup| email == "nobody@example.com" && *lookup == UserLookup::WithPassword)
            .returning(|_, _| Ok(None));

        let err = service(store)
            .login("nobody@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, USER_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email()
            .returning(|_, _| Ok(Some(stored_user())));

        let err = service(store)
            .login("host@example.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, WRONG_PASSWORD_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_success_issues_token_for_user() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email()
            .returning(|_, _| Ok(Some(stored_user())));

        let token = service(store).login("host@example.com", "pw").await.unwrap();
        let claims = jwt().validate(&token).unwrap();
        assert_eq!(claims.user_id(), UserId::new(1));
    }

    #[tokio::test]
    async fn test_login_store_failure_carries_cause_message() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_email()
            .returning(|_, _| Err(AppError::database("pool timed out")));

        let err = service(store)
            .login("host@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "pool timed out");
    }

    #[tokio::test]
    async fn test_find_by_id_maps_missing_and_failures() {
        let mut store = MockUserStore::new();
        store
            .expect_get_by_id()
            .with(eq(UserId::new(2)))
            .returning(|id| Err(AppError::not_found(format!("User {id} not found"))));
        store
            .expect_get_by_id()
            .with(eq(UserId::new(3)))
            .returning(|_| Err(AppError::database("boom")));

        let service = service(store);
        let missing = service.find_by_id(UserId::new(2)).await.unwrap_err();
        assert_eq!(missing.message, USER_NOT_FOUND_MESSAGE);

        let failed = service.find_by_id(UserId::new(3)).await.unwrap_err();
        assert_eq!(failed.kind, ErrorKind::Internal);
        assert_eq!(failed.message, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_edit_profile_sets_pending_password_and_saves() {
        let mut store = MockUserStore::new();
        store
            .expect_get_by_id()
            .returning(|_| Ok(stored_user().without_password_hash()));
        store
            .expect_save()
            .withf(|user| user.email == "new@example.com" && user.has_pending_password())
            .times(1)
            .returning(Ok);

        service(store)
            .edit_profile(
                UserId::new(1),
                EditProfile {
                    email: Some("new@example.com".to_string()),
                    password: Some("new-pw".to_string()),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_edit_profile_missing_user_never_saves() {
        let mut store = MockUserStore::new();
        store
            .expect_get_by_id()
            .returning(|id| Err(AppError::not_found(format!("User {id} not found"))));
        store.expect_save().never();

        let err = service(store)
            .edit_profile(UserId::new(9), EditProfile::default())
            .await
            .unwrap_err();
        assert_eq!(err.message, USER_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_edit_profile_save_failure_is_generic() {
        let mut store = MockUserStore::new();
        store
            .expect_get_by_id()
            .returning(|_| Ok(stored_user().without_password_hash()));
        store
            .expect_save()
            .returning(|_| Err(AppError::conflict("Email already in use")));

        let err = service(store)
            .edit_profile(UserId::new(1), EditProfile::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "Could not update profile");
    }
}
