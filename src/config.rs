use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend_url: String,
    pub request_timeout: Duration,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Returns the process configuration, reading the environment on first use
    /// if `init` was never called.
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(|| Self::from_env().unwrap_or_default())
    }

    pub fn init() -> Result<(), String> {
        let config = Self::from_env()?;
        CONFIG
            .set(config)
            .map_err(|_| "Config already initialized".to_string())
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests never touch process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let request_timeout = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| format!("BACKEND_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let environment = match lookup("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Config {
            backend_url,
            request_timeout,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            environment,
        })
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            environment: Environment::Development,
        }
    }
}
