//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quill_infra::{DatabaseConfig, OpenAiConfig};

/// Startup configuration errors. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` only when built without a database driver.
    pub database: Option<DatabaseConfig>,
    pub openai: OpenAiConfig,
    pub static_dir: PathBuf,
    pub template_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match var("DATABASE_URL") {
            Some(url) => Some(Self::database_config(url, &var)?),
            None if cfg!(feature = "postgres") => return Err(ConfigError::Missing("DATABASE_URL")),
            None => None,
        };

        let api_key = var("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let mut openai = OpenAiConfig::new(api_key);
        if let Some(base_url) = var("OPENAI_API_BASE_URL") {
            openai.base_url = base_url;
        }
        if let Some(model) = var("OPENAI_MODEL") {
            openai.model = model;
        }
        if let Some(secs) = var("OPENAI_TIMEOUT_SECS") {
            openai.timeout = Duration::from_secs(parse("OPENAI_TIMEOUT_SECS", &secs)?);
        }

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: match var("PORT") {
                Some(p) => parse("PORT", &p)?,
                None => 8888,
            },
            database,
            openai,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend")),
            template_dir: var("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend/templates")),
        })
    }

    fn database_config(
        url: String,
        var: &impl Fn(&str) -> Option<String>,
    ) -> Result<DatabaseConfig, ConfigError> {
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::Invalid {
                name: "DATABASE_URL",
                reason: "expected a postgres:// connection string".to_string(),
            });
        }

        let mut config = DatabaseConfig::new(url);
        if let Some(max) = var("DB_MAX_CONNECTIONS") {
            config.max_connections = parse("DB_MAX_CONNECTIONS", &max)?;
        }
        if let Some(min) = var("DB_MIN_CONNECTIONS") {
            config.min_connections = parse("DB_MIN_CONNECTIONS", &min)?;
        }
        Ok(config)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
