//! Conversation window and tool-loop configuration.

use serde::{Deserialize, Serialize};

/// Context budget applied when building each model request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Most recent turns sent to the model; older turns are dropped first
    /// (valid range: 1-1000).
    pub max_turns: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { max_turns: 20 }
    }
}

/// Model tool calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub enabled: bool,
    /// Model/tool round trips allowed per user message (valid range: 1-100).
    pub max_tool_rounds: u32,
    /// Model used by the grounded web search tool.
    pub search_model: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_tool_rounds: 10,
            search_model: "gemini-2.0-flash".into(),
        }
    }
}
