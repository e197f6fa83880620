//! Outbound model requests and the context budget.

use crate::conversation::Turn;
use crate::prompt::PromptTemplate;
use crate::{Message, Role, ToolDefinition};

/// How many of the most recent turns a request may carry.
///
/// Truncation drops the oldest turns first and never reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextBudget {
    max_turns: usize,
}

impl ContextBudget {
    /// A budget of at least one turn.
    pub fn new(max_turns: usize) -> Self {
        Self {
            max_turns: max_turns.max(1),
        }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// The suffix of `history` that fits the budget.
    pub fn window<'a>(&self, history: &'a [Turn]) -> &'a [Turn] {
        let start = history.len().saturating_sub(self.max_turns);
        &history[start..]
    }
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Ephemeral request handed to a [`crate::ModelClient`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRequest {
    pub system_instruction: Option<String>,
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
    /// Ask the endpoint to ground the answer with web search.
    pub web_search: bool,
}

impl ModelRequest {
    /// Template plus the budgeted tail of the conversation history.
    pub fn from_history(template: &PromptTemplate, history: &[Turn], budget: ContextBudget) -> Self {
        let messages = budget
            .window(history)
            .iter()
            .map(|turn| Message::new(turn.role(), turn.text()))
            .collect();

        Self {
            system_instruction: Some(template.system_instruction()),
            messages,
            tools: Vec::new(),
            web_search: false,
        }
    }

    /// A one-shot request with no template or history.
    pub fn single_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::new(Role::User, prompt)],
            ..Self::default()
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_web_search(mut self) -> Self {
        self.web_search = true;
        self
    }

    /// Append a scratch message (tool call or tool result) for the next round.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Conversation turns carried, excluding tool scratch messages.
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role != Role::Tool)
            .count()
    }
}
