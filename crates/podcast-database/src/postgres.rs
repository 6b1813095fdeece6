//! Opening the PostgreSQL pool behind the podcast stores.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use podcast_core::config::DatabaseConfig;
use podcast_core::error::{AppError, ErrorKind};
use podcast_core::result::AppResult;

/// Connects to the configured database and brings the podcast schema up to
/// date when `run_migrations` is set.
pub(crate) async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %redact_url(&config.url),
        max_connections = config.max_connections,
        "Opening podcast database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Could not reach the podcast database: {e}"),
                e,
            )
        })?;

    if config.run_migrations {
        apply_schema(&pool).await?;
    } else {
        warn!("Schema migrations disabled; expecting users, podcasts and episodes tables");
    }

    Ok(pool)
}

/// Applies the embedded users/podcasts/episodes migrations.
async fn apply_schema(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Could not migrate the podcast schema: {e}"),
                e,
            )
        })?;
    info!("Podcast schema is up to date");
    Ok(())
}

/// Round-trips a trivial query through the pool.
pub(crate) async fn ping(pool: &PgPool) -> AppResult<bool> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|one| one == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
}

/// Hides the password in the authority part of a connection URL.
///
/// Only the text between `scheme://` and the first `/`, `?` or `#` is
/// treated as the authority, so an `@` elsewhere is left alone.
fn redact_url(url: &str) -> String {
    let authority_start = url.find("://").map_or(0, |pos| pos + 3);
    let rest = &url[authority_start..];
    let authority = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];

    let Some(at) = authority.rfind('@') else {
        return url.to_string();
    };
    let Some(colon) = authority[..at].find(':') else {
        return url.to_string();
    };

    format!(
        "{}{}:****{}",
        &url[..authority_start],
        &authority[..colon],
        &rest[at..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_hides_password_only() {
        assert_eq!(
            redact_url("postgres://podcast:hunter2@db:5432/podcasts"),
            "postgres://podcast:****@db:5432/podcasts"
        );
        assert_eq!(
            redact_url("postgres://podcast:p@ss@db/podcasts"),
            "postgres://podcast:****@db/podcasts"
        );
    }

    #[test]
    fn test_redact_leaves_urls_without_password() {
        for url in [
            "postgres://db:5432/podcasts",
            "postgres://podcast@db/podcasts",
            "postgres://db/podcasts?user=host@example.com",
        ] {
            assert_eq!(redact_url(url), url);
        }
    }

    #[test]
    fn test_redact_tolerates_malformed_urls() {
        assert_eq!(redact_url("x@y://z"), "x@y://z");
        assert_eq!(redact_url("user:pw@db"), "user:****@db");
        assert_eq!(redact_url(""), "");
    }
}
