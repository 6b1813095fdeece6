//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use podcast_entity::{EditProfile, NewUser, UserRole};

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Email address.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

impl From<CreateAccountRequest> for NewUser {
    fn from(req: CreateAccountRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile edit body. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditProfileRequest {
    #[serde(default)]
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
}

impl From<EditProfileRequest> for EditProfile {
    fn from(req: EditProfileRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}
