//! Claims carried by every issued token.

use serde::{Deserialize, Serialize};

use podcast_core::types::UserId;

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// The authenticated user's id.
    pub id: i64,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp, present only when a token TTL is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// The user id as a typed identifier.
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}
