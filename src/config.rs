use crate::error::ConfigError;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_API_VERSION: &str = "5.92";
// VK allows three calls per second for user tokens
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 340;

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub api_version: String,
    pub request_delay: Duration,
}

impl Config {
    /// Reads the configuration from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("VK_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let api_url = lookup("VK_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_version = lookup("VK_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let request_delay = match lookup("VK_REQUEST_DELAY_MS") {
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "VK_REQUEST_DELAY_MS",
                    value: raw.clone(),
                })?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
        };

        Ok(Self {
            token,
            api_url,
            api_version,
            request_delay,
        })
    }
}
