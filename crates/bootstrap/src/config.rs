use std::time::Duration;

use dvdrental_core::error::CoreError;
use dvdrental_db::DbConfig;

/// Log output format, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` selects JSON lines; anything else is plain text.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Bootstrap configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub database: DbConfig,
}

impl BootstrapConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `DATABASE_URL`            | required  |
    /// | `DB_MAX_CONNECTIONS`      | `5`       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `10`      |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(CoreError::MissingSetting("DATABASE_URL"))?;

        let mut database = DbConfig::new(database_url);

        if let Some(raw) = lookup("DB_MAX_CONNECTIONS") {
            database.max_connections = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(CoreError::Validation(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )))
                }
            };
        }

        if let Some(raw) = lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                CoreError::Validation(format!(
                    "DB_ACQUIRE_TIMEOUT_SECS must be a valid u64, got {raw:?}"
                ))
            })?;
            database.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(Self { database })
    }
}
