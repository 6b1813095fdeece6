//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `PODCAST__`, e.g.
    /// `PODCAST__AUTH__JWT_SECRET`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PODCAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations that cannot start a server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.database.provider == DatabaseProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required when database.provider = \"postgres\"",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_toml() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [database]
                provider = "memory"

                [auth]
                jwt_secret = "s3cret"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("build");

        let app: AppConfig = config.try_deserialize().expect("deserialize");
        assert_eq!(app.database.provider, DatabaseProvider::Memory);
        assert_eq!(app.auth.jwt_secret, "s3cret");
        assert_eq!(app.auth.token_ttl_minutes, None);
        assert_eq!(app.server.port, 8080);
        assert_eq!(app.logging.level, "info");
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut app = AppConfig::default();
        app.database.provider = DatabaseProvider::Memory;
        app.auth.jwt_secret = "  ".to_string();
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_validate_requires_url_for_postgres() {
        let mut app = AppConfig::default();
        app.database.url = String::new();
        assert!(app.validate().is_err());
    }
}
