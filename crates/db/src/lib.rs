//! Persistence for the project catalog.
//!
//! Connection setup, schema migrations, sector seeding, the row models,
//! the repositories, and [`store::CatalogStore`], the typed data-access
//! seam the HTTP layer talks to.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Connection parameters for the catalog database.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    /// When `false`, TLS is still required but the server certificate is
    /// not verified.
    pub strict_transport_verification: bool,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field(
                "strict_transport_verification",
                &self.strict_transport_verification,
            )
            .finish()
    }
}

impl DbConfig {
    /// TLS mode implied by `strict_transport_verification`.
    pub fn ssl_mode(&self) -> PgSslMode {
        if self.strict_transport_verification {
            PgSslMode::VerifyFull
        } else {
            PgSslMode::Require
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode())
    }
}

/// Create a connection pool. Fails if the first connection cannot be made.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strict: bool) -> DbConfig {
        DbConfig {
            host: "db.internal".into(),
            port: 5432,
            database: "catalog".into(),
            user: "catalog".into(),
            password: "hunter2".into(),
            max_connections: 5,
            strict_transport_verification: strict,
        }
    }

    #[test]
    fn strict_verification_requires_full_certificate_check() {
        assert!(matches!(config(true).ssl_mode(), PgSslMode::VerifyFull));
    }

    #[test]
    fn relaxed_verification_still_requires_tls() {
        assert!(matches!(config(false).ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", config(true));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
