//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles an account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    /// Publishes podcasts and episodes.
    Host,
    /// Consumes content.
    Listener,
}

impl UserRole {
    /// Check if this role may create and edit podcasts.
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host)
    }

    /// Return the role as it is spelled on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Listener => "Listener",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = podcast_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(Self::Host),
            "listener" => Ok(Self::Listener),
            _ => Err(podcast_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Host, Listener"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Host".parse::<UserRole>().unwrap(), UserRole::Host);
        assert_eq!("listener".parse::<UserRole>().unwrap(), UserRole::Listener);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&UserRole::Listener).unwrap();
        assert_eq!(json, "\"Listener\"");
    }
}
