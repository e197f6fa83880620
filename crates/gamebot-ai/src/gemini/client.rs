//! Gemini API client struct, request building, and response parsing.

use crate::request::ModelRequest;
use crate::tools::to_gemini_tool;
use crate::{AiError, ModelResponse, Role, TokenUsage, ToolCall};

use super::config::GeminiConfig;

/// Gemini API client.
///
/// Holds one pooled HTTP connection handle with bounded timeouts and nothing
/// else across calls.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, request: &ModelRequest) -> serde_json::Value {
        let mut contents = Vec::new();
        let mut system_parts: Vec<&str> = request
            .system_instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .into_iter()
            .collect();

        for msg in &request.messages {
            let role = match msg.role {
                Role::User | Role::Tool => "user",
                Role::Assistant => "model",
                Role::System => {
                    system_parts.push(&msg.content);
                    continue;
                }
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_parts.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_parts.join("\n\n") }]
            });
        }

        if request.web_search {
            body["tools"] = serde_json::json!([{ "google_search": {} }]);
        } else if !request.tools.is_empty() {
            let tool_defs: Vec<_> = request.tools.iter().map(to_gemini_tool).collect();
            body["tools"] = serde_json::json!([{
                "functionDeclarations": tool_defs
            }]);
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<ModelResponse, AiError> {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(AiError::Malformed(format!("prompt blocked: {reason}")));
        }

        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::Malformed("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::Malformed("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut text = String::new();
        let mut tool_calls = Vec::new();

        for part in &parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
            if let Some(fc) = part.get("functionCall") {
                tool_calls.push(ToolCall {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: fc["name"].as_str().unwrap_or("").to_string(),
                    arguments: fc["args"].clone(),
                });
            }
        }

        if text.trim().is_empty() && tool_calls.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("unknown");
            return Err(AiError::Malformed(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(ModelResponse {
            text,
            tool_calls,
            usage,
        })
    }
}
