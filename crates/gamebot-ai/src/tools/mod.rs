//! Tools the model may call while answering a board-game question.
//!
//! A tool call never fails the exchange: problems are reported back to the
//! model as the tool's output text.

mod definitions;
mod games;

use async_trait::async_trait;

use crate::{TokenUsage, ToolCall, ToolDefinition};

pub use definitions::{game_tools, to_gemini_tool};
pub use games::GameTools;

/// Result of one tool call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOutput {
    /// Text handed back to the model.
    pub text: String,
    /// Model usage spent producing the output, labelled with the model name.
    pub usage: Option<(String, TokenUsage)>,
}

impl ToolOutput {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// A set of callable tools offered to the model.
#[async_trait]
pub trait ToolBox: Send + Sync {
    fn definitions(&self) -> Vec<ToolDefinition>;

    /// Run one call and return its output for the model.
    async fn execute(&self, call: &ToolCall) -> ToolOutput;
}

#[cfg(test)]
mod tests;
