use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::keep_alive::DEFAULT_INTERVAL;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got `{value}`")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must be a positive number of seconds, got `{value}`")]
    InvalidInterval { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAliveConfig {
    pub url: String,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Seed document on disk; the embedded one is used when absent.
    pub seed_path: Option<PathBuf>,
    pub director_label: Option<String>,
    pub role_label: Option<String>,
    pub keep_alive: Option<KeepAliveConfig>,
}

/// Loads `.env.{RUST_ENV}` (default `development`), falling back to `.env`.
/// Missing files are not an error.
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| {
            warn!("HOST not set, defaulting to {}", DEFAULT_HOST);
            DEFAULT_HOST.to_string()
        });

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                key: "PORT",
                value: raw,
            })?,
            None => {
                warn!("PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let keep_alive = match get("KEEP_ALIVE_URL") {
            Some(url) => {
                let interval = match get("KEEP_ALIVE_INTERVAL_SECS") {
                    Some(raw) => parse_interval("KEEP_ALIVE_INTERVAL_SECS", raw)?,
                    None => DEFAULT_INTERVAL,
                };
                Some(KeepAliveConfig { url, interval })
            }
            None => None,
        };

        Ok(Self {
            host,
            port,
            seed_path: get("SEED_PATH").map(PathBuf::from),
            director_label: get("SEARCH_DIRECTOR_LABEL"),
            role_label: get("SEARCH_ROLE_LABEL"),
            keep_alive,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_interval(key: &'static str, raw: String) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidInterval { key, value: raw }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
