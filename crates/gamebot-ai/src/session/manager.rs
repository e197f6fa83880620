//! Session struct and conversation management.

use std::sync::Arc;

use gamebot_common::SessionId;
use tracing::debug;

use crate::conversation::{ConversationState, Turn};
use crate::prompt::PromptTemplate;
use crate::request::ContextBudget;
use crate::token_tracker::TokenTracker;
use crate::tools::ToolBox;
use crate::ModelClient;

/// One user's conversation with GameBot.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) state: ConversationState,
    /// Shared persona and instructions merged into every request.
    pub(super) template: Arc<PromptTemplate>,
    pub(super) client: Arc<dyn ModelClient>,
    pub(super) budget: ContextBudget,
    /// Tools offered to the model, if any.
    pub(super) tools: Option<Arc<dyn ToolBox>>,
    /// Maximum tool-call loop iterations per user message.
    pub(super) max_tool_rounds: u32,
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new(template: Arc<PromptTemplate>, client: Arc<dyn ModelClient>) -> Self {
        Self {
            id: SessionId::new(),
            state: ConversationState::new(),
            template,
            client,
            budget: ContextBudget::default(),
            tools: None,
            max_tool_rounds: 10,
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_budget(mut self, budget: ContextBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_tools(mut self, tools: Arc<dyn ToolBox>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_max_tool_rounds(mut self, max: u32) -> Self {
        self.max_tool_rounds = max;
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    /// Every turn of the current conversation, oldest first.
    pub fn history(&self) -> &[Turn] {
        self.state.history()
    }

    /// Greeting shown when the session starts. Never touches the network.
    pub fn welcome_message(&self) -> &str {
        self.template.welcome_message()
    }

    pub fn usage(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn budget(&self) -> ContextBudget {
        self.budget
    }

    /// Start over with an empty conversation under a fresh session id.
    pub fn reset(&mut self) {
        let previous = std::mem::take(&mut self.id);
        self.state.reset();
        self.tracker.reset();
        debug!(previous = %previous, session = %self.id, "Session reset");
    }
}
