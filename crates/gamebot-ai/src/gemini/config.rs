//! Gemini API client configuration.

use std::time::Duration;

use gamebot_config::schema::{ModelConfig, RetryConfig};
use gamebot_config::ApiKey;

use crate::retry::RetryPolicy;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryPolicy,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }

    /// Build from the `[model]` and `[retry]` config sections.
    pub fn from_settings(api_key: &ApiKey, model: &ModelConfig, retry: &RetryConfig) -> Self {
        Self::new(api_key.expose())
            .with_model(model.name.clone())
            .with_max_tokens(model.max_output_tokens)
            .with_temperature(model.temperature)
            .with_base_url(model.base_url.clone())
            .with_timeouts(
                Duration::from_secs(u64::from(model.request_timeout_secs)),
                Duration::from_secs(u64::from(model.connect_timeout_secs)),
            )
            .with_retry(RetryPolicy::from_config(retry))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, request: Duration, connect: Duration) -> Self {
        self.request_timeout = request;
        self.connect_timeout = connect;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
