//! Process-wide state shared by every connection.

use std::sync::Arc;

use gamebot_ai::{
    AiError, ContextBudget, GameTools, GeminiClient, GeminiConfig, Session, TemplateStore,
};
use gamebot_config::{ApiKey, GameBotConfig};

use crate::registry::SessionRegistry;

pub struct ServerState {
    pub config: GameBotConfig,
    pub templates: TemplateStore,
    api_key: ApiKey,
    pub registry: SessionRegistry,
}

impl ServerState {
    pub fn new(config: GameBotConfig, templates: TemplateStore, api_key: ApiKey) -> Self {
        let registry = SessionRegistry::new(config.server.max_sessions as usize);
        Self {
            config,
            templates,
            api_key,
            registry,
        }
    }

    /// Build a fresh session with its own Gemini client and tools.
    pub fn new_session(&self) -> Result<Session, AiError> {
        let gemini = GeminiConfig::from_settings(&self.api_key, &self.config.model, &self.config.retry);
        let client = Arc::new(GeminiClient::new(gemini.clone())?);

        let mut session = Session::new(self.templates.get_template(), client)
            .with_budget(ContextBudget::new(self.config.context.max_turns as usize))
            .with_max_tool_rounds(self.config.tools.max_tool_rounds);

        if self.config.tools.enabled {
            let searcher = GeminiClient::new(gemini.with_model(self.config.tools.search_model.clone()))?;
            let tools = GameTools::new(self.config.games.catalog.clone()).with_searcher(Arc::new(searcher));
            session = session.with_tools(Arc::new(tools));
        }

        Ok(session)
    }

    pub fn games(&self) -> &[String] {
        &self.config.games.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(config: GameBotConfig) -> ServerState {
        let templates = TemplateStore::load(&config.persona).unwrap();
        ServerState::new(config, templates, ApiKey::new("test-key"))
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let state = state(GameBotConfig::default());
        let a = state.new_session().unwrap();
        let b = state.new_session().unwrap();
        assert_ne!(a.session_id(), b.session_id());
        assert!(a.history().is_empty());
    }

    #[test]
    fn session_uses_context_budget_from_config() {
        let mut config = GameBotConfig::default();
        config.context.max_turns = 6;
        let session = state(config).new_session().unwrap();
        assert_eq!(session.budget().max_turns(), 6);
    }

    #[test]
    fn welcome_comes_from_persona() {
        let state = state(GameBotConfig::default());
        let session = state.new_session().unwrap();
        assert_eq!(session.welcome_message(), state.config.persona.welcome_message);
        assert_eq!(state.games().len(), 7);
    }
}
