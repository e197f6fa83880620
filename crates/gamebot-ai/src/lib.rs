//! Conversation core for GameBot.
//!
//! Provides the pieces between a user's message and the hosted model:
//! - Prompt template store (persona + instructions)
//! - Conversation state (append-only turn log)
//! - Model requests with a drop-oldest context budget
//! - Gemini client adapter with a typed error taxonomy and one retry
//! - Board-game tools and the session orchestrator that runs the tool loop

pub mod conversation;
pub mod gemini;
pub mod prompt;
pub mod request;
pub mod retry;
pub mod session;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use conversation::{ConversationState, Turn};
pub use gemini::{GeminiClient, GeminiConfig};
pub use prompt::{PromptTemplate, TemplateStore};
pub use request::{ContextBudget, ModelRequest};
pub use retry::RetryPolicy;
pub use session::{ChatError, Session};
pub use token_tracker::TokenTracker;
pub use tools::{GameTools, ToolBox, ToolOutput};

/// Anything that can answer a [`ModelRequest`].
///
/// The Gemini adapter is the production implementation; tests substitute
/// scripted clients.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn ask(&self, request: &ModelRequest) -> Result<ModelResponse, AiError>;

    /// Model identifier, used to label token usage.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Tool output fed back to the model. Never stored as a turn.
    Tool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// A successful model reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelResponse {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
    pub usage: TokenUsage,
}

impl ModelResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Coarse error classes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    RateLimited,
    Unauthorized,
    Unavailable,
    Malformed,
}

impl ErrorKind {
    /// Short human-readable message for the UI.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Please type a question first.",
            ErrorKind::RateLimited => {
                "GameBot is getting too many requests right now. Please wait a moment and try again."
            }
            ErrorKind::Unauthorized => {
                "GameBot could not authenticate with the AI service. Check the API key."
            }
            ErrorKind::Unavailable => {
                "The AI service is unreachable at the moment. Please try again shortly."
            }
            ErrorKind::Malformed => "GameBot received an unexpected answer. Please rephrase and try again.",
        }
    }
}

/// Failure talking to the model endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("rate limited")]
    RateLimited,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed exchange: {0}")]
    Malformed(String),
}

impl AiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AiError::RateLimited => ErrorKind::RateLimited,
            AiError::Unauthorized(_) => ErrorKind::Unauthorized,
            AiError::Unavailable(_) => ErrorKind::Unavailable,
            AiError::Malformed(_) => ErrorKind::Malformed,
        }
    }

    /// Transient failures worth one more attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AiError::RateLimited | AiError::Unavailable(_))
    }

    /// Classify a non-2xx HTTP status.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail: String = body.trim().chars().take(200).collect();
        match status {
            429 => AiError::RateLimited,
            401 | 403 => AiError::Unauthorized(format!("HTTP {status}: {detail}")),
            408 | 500..=599 => AiError::Unavailable(format!("HTTP {status}: {detail}")),
            _ => AiError::Malformed(format!("HTTP {status}: {detail}")),
        }
    }
}
