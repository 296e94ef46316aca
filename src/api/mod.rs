pub mod methods;
pub mod rate_limit;

use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use log::{debug, error};
use rate_limit::{FixedDelay, RateLimiter};
use serde_json::Value;

/// A single `name=value` query parameter. Lists are passed comma-joined.
pub type Param<'a> = (&'a str, String);

/// Anything that can execute a VK method and hand back its `response` payload.
#[async_trait]
pub trait VkApi: Send + Sync {
    async fn call(&self, method: &str, params: &[Param<'_>]) -> Result<Value, ApiError>;
}

pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    limiter: Box<dyn RateLimiter>,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        let limiter = FixedDelay::new(config.request_delay);
        Self::with_limiter(config, Box::new(limiter))
    }

    pub fn with_limiter(config: Config, limiter: Box<dyn RateLimiter>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            limiter,
        }
    }
}

#[async_trait]
impl VkApi for ApiClient {
    async fn call(&self, method: &str, params: &[Param<'_>]) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.config.api_url, method);

        // Caller params first, then the fixed token and version
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("access_token", self.config.token.as_str()));
        query.push(("v", self.config.api_version.as_str()));

        // Pause before every request, whatever the previous one returned
        self.limiter.acquire().await;
        debug!("GET {} {:?}", url, params);

        let text = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let body: Value = serde_json::from_str(&text)?;

        unwrap_envelope(method, params, body)
    }
}

/// Splits the `{response: ..}` / `{error: ..}` envelope. Error envelopes are logged
/// with the method and its parameters (never the token) and returned as `ApiError::Remote`.
pub fn unwrap_envelope(method: &str, params: &[Param<'_>], mut body: Value) -> Result<Value, ApiError> {
    if let Some(err) = body.get("error") {
        error!("Error: {} {:?} {}", method, params, err);
        return Err(ApiError::Remote {
            method: method.to_string(),
            code: err.get("error_code").and_then(Value::as_i64).unwrap_or_default(),
            message: err
                .get("error_msg")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
        });
    }

    match body.get_mut("response") {
        Some(response) => Ok(response.take()),
        None => Err(ApiError::MissingResponse {
            method: method.to_string(),
        }),
    }
}
