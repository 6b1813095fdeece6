//! HS256 token creation and validation.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use podcast_core::config::AuthConfig;
use podcast_core::error::AppError;
use podcast_core::result::AppResult;
use podcast_core::types::UserId;

use super::claims::TokenClaims;

/// Message returned for every token that fails validation.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Issues and validates signed tokens encoding a user id.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl fmt::Debug for JwtService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtService")
            .field("validation", &self.validation)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// Creates the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let ttl = config
            .token_ttl_minutes
            .and_then(|minutes| i64::try_from(minutes).ok())
            .and_then(Duration::try_minutes);

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional, but when present it is always enforced.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Signs a token for `user_id`.
    pub fn issue(&self, user_id: UserId) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: user_id.value(),
            iat: now.timestamp(),
            exp: self
                .ttl
                .and_then(|ttl| now.checked_add_signed(ttl))
                .map(|at| at.timestamp()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies `token` and returns its claims.
    pub fn validate(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Token validation failed");
                AppError::authentication(INVALID_TOKEN_MESSAGE)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcast_core::error::ErrorKind;

    fn config(secret: &str, ttl: Option<u64>) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_minutes: ttl,
        }
    }

    #[test]
    fn test_issue_then_validate_returns_user_id() {
        let service = JwtService::new(&config("secret", None));
        let token = service.issue(UserId::new(7)).unwrap();
        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.user_id(), UserId::new(7));
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_ttl_adds_expiry() {
        let service = JwtService::new(&config("secret", Some(30)));
        let token = service.issue(UserId::new(1)).unwrap();
        let claims = service.validate(&token).unwrap();
        let exp = claims.exp.unwrap();
        assert_eq!(exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_wrong_secret_is_invalid_token() {
        let issuer = JwtService::new(&config("one", None));
        let verifier = JwtService::new(&config("two", None));
        let token = issuer.issue(UserId::new(1)).unwrap();

        let err = verifier.validate(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn test_garbage_is_invalid_token() {
        let service = JwtService::new(&config("secret", None));
        let err = service.validate("not-a-token").unwrap_err();
        assert_eq!(err.message, INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(&config("secret", Some(1)));
        let now = Utc::now().timestamp();
        let stale = TokenClaims {
            id: 1,
            iat: now - 3600,
            exp: Some(now - 1800),
        };
        let token = encode(&Header::default(), &stale, &service.encoding_key).unwrap();
        assert!(service.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected_without_ttl() {
        let service = JwtService::new(&config("secret", None));
        let now = Utc::now().timestamp();
        let stale = TokenClaims {
            id: 1,
            iat: now - 7200,
            exp: Some(now - 3600),
        };
        let token = encode(&Header::default(), &stale, &service.encoding_key).unwrap();

        let err = service.validate(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, INVALID_TOKEN_MESSAGE);
    }
}
