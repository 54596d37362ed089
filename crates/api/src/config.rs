use std::path::PathBuf;

use catalog_db::DbConfig;

/// Database variables that must be present at startup.
const REQUIRED_DB_VARS: [&str; 5] = ["PGHOST", "PGDATABASE", "PGUSER", "PGPASSWORD", "PGPORT"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Environment variable {name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DbConfig,
    /// Optional JSON file replacing the built-in sector seed list.
    pub sector_seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                            | Default    |
    /// |------------------------------------|------------|
    /// | `PGHOST`                           | required   |
    /// | `PGPORT`                           | required   |
    /// | `PGDATABASE`                       | required   |
    /// | `PGUSER`                           | required   |
    /// | `PGPASSWORD`                       | required   |
    /// | `HOST`                             | `0.0.0.0`  |
    /// | `PORT`                             | `8080`     |
    /// | `REQUEST_TIMEOUT_SECS`             | `30`       |
    /// | `DB_MAX_CONNECTIONS`               | `10`       |
    /// | `DB_STRICT_TRANSPORT_VERIFICATION` | `true`     |
    /// | `SECTOR_SEED_PATH`                 | unset      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&'static str> = REQUIRED_DB_VARS
            .into_iter()
            .filter(|name| lookup(*name).is_none_or(|v| v.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        let required = |name: &'static str| lookup(name).unwrap_or_default();

        let database = DbConfig {
            host: required("PGHOST"),
            port: parse_var("PGPORT", &required("PGPORT"))?,
            database: required("PGDATABASE"),
            user: required("PGUSER"),
            password: required("PGPASSWORD"),
            max_connections: optional(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            strict_transport_verification: optional_bool(
                &lookup,
                "DB_STRICT_TRANSPORT_VERIFICATION",
                true,
            )?,
        };

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: optional(&lookup, "PORT", 8080)?,
            request_timeout_secs: optional(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
        };

        let sector_seed_path = lookup("SECTOR_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            server,
            database,
            sector_seed_path,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}

fn optional<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => parse_var(name, &raw),
        None => Ok(default),
    }
}

fn optional_bool<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value: raw }),
    }
}
