//! Model endpoint and retry configuration types.

use serde::{Deserialize, Serialize};

/// Generative-AI endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Upper bound on generated tokens per reply (valid range: 1-8192).
    pub max_output_tokens: u32,
    /// API origin; the `/v1beta/models/...` path is appended by the client.
    pub base_url: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    /// TCP/TLS connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash".into(),
            temperature: 0.7,
            max_output_tokens: 2048,
            base_url: "https://generativelanguage.googleapis.com".into(),
            request_timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

/// Automatic retry of transient failures (rate limiting, unavailability).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt (valid range: 0-1).
    pub max_retries: u32,
    /// Fixed delay before a retry, in milliseconds (valid range: 0-10000).
    pub backoff_ms: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff_ms: 500,
        }
    }
}
