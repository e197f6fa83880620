//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::request::ModelRequest;
use crate::{AiError, ModelClient, ModelResponse};

use super::client::GeminiClient;

#[async_trait]
impl ModelClient for GeminiClient {
    async fn ask(&self, request: &ModelRequest) -> Result<ModelResponse, AiError> {
        let body = self.build_request_body(request);
        let url = self.api_url();

        self.config
            .retry
            .run(|attempt| self.send_once(&url, &body, attempt))
            .await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

impl GeminiClient {
    async fn send_once(
        &self,
        url: &str,
        body: &serde_json::Value,
        attempt: u32,
    ) -> Result<ModelResponse, AiError> {
        debug!(model = %self.config.model, attempt, "Gemini API request");

        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = AiError::from_status(status.as_u16(), &text);
            debug!(model = %self.config.model, %status, error = %err, "Gemini API error status");
            return Err(err);
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Unavailable("timed out reading response".to_string())
            } else {
                AiError::Malformed(e.to_string())
            }
        })?;

        self.parse_response(json)
    }
}

/// Map a failure to get any HTTP response at all.
fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Unavailable("request timed out".to_string())
    } else if e.is_connect() {
        AiError::Unavailable(format!("connection failed: {e}"))
    } else if e.is_builder() {
        AiError::Malformed(format!("invalid request: {e}"))
    } else {
        AiError::Unavailable(e.to_string())
    }
}
