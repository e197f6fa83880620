//! Retry of transient model failures.
//!
//! At most one retry, after a fixed backoff, and only for errors where
//! [`AiError::is_retryable`] holds. Everything else surfaces immediately.

use std::future::Future;
use std::time::Duration;

use gamebot_config::schema::RetryConfig;
use tracing::warn;

use crate::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// `max_retries` is capped at one.
    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries: max_retries.min(1),
            backoff,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(u64::from(config.backoff_ms)),
        )
    }

    /// Never retry.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Run `op`, passing the zero-based attempt number, retrying per policy.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, AiError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AiError>>,
    {
        let mut attempt = 0;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    warn!(attempt, error = %e, backoff_ms = self.backoff.as_millis() as u64, "Retrying model request");
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
