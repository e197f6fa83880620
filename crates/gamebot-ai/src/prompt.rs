//! Prompt template store.
//!
//! The template is loaded once at startup from the `[persona]` config section
//! and shared read-only by every session.

use std::sync::Arc;

use gamebot_common::ConfigError;
use gamebot_config::schema::PersonaConfig;

/// Fixed instruction text merged with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    persona_text: String,
    instructions: String,
    welcome_message: String,
}

impl PromptTemplate {
    /// Build a template; blank persona text or instructions are rejected.
    pub fn new(
        persona_text: impl Into<String>,
        instructions: impl Into<String>,
        welcome_message: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let persona_text = persona_text.into();
        let instructions = instructions.into();
        if persona_text.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "persona.persona_text is empty".into(),
            ));
        }
        if instructions.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "persona.instructions is empty".into(),
            ));
        }
        Ok(Self {
            persona_text,
            instructions,
            welcome_message: welcome_message.into(),
        })
    }

    pub fn from_config(persona: &PersonaConfig) -> Result<Self, ConfigError> {
        Self::new(
            persona.persona_text.clone(),
            persona.instructions.clone(),
            persona.welcome_message.clone(),
        )
    }

    pub fn persona_text(&self) -> &str {
        &self.persona_text
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    /// Persona followed by instructions, as sent to the model.
    pub fn system_instruction(&self) -> String {
        format!("{}\n\n{}", self.persona_text.trim(), self.instructions.trim())
    }
}

/// Process-wide holder of the loaded template.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    template: Arc<PromptTemplate>,
}

impl TemplateStore {
    pub fn load(persona: &PersonaConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            template: Arc::new(PromptTemplate::from_config(persona)?),
        })
    }

    pub fn get_template(&self) -> Arc<PromptTemplate> {
        Arc::clone(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_persona() {
        let store = TemplateStore::load(&PersonaConfig::default()).unwrap();
        let template = store.get_template();
        assert!(template.persona_text().starts_with("You are GameBot"));
        assert!(!template.welcome_message().is_empty());
    }

    #[test]
    fn get_template_shares_one_instance() {
        let store = TemplateStore::load(&PersonaConfig::default()).unwrap();
        assert!(Arc::ptr_eq(&store.get_template(), &store.get_template()));
    }

    #[test]
    fn blank_fields_fail_fast() {
        let persona = PersonaConfig {
            persona_text: " ".into(),
            ..PersonaConfig::default()
        };
        let err = TemplateStore::load(&persona).unwrap_err();
        assert!(err.to_string().contains("persona.persona_text"));

        let err = PromptTemplate::new("You are a bot.", "", "hi").unwrap_err();
        assert!(err.to_string().contains("persona.instructions"));
    }

    #[test]
    fn system_instruction_joins_persona_and_instructions() {
        let template = PromptTemplate::new("You are a bot.  ", "\nBe brief.", "").unwrap();
        assert_eq!(template.system_instruction(), "You are a bot.\n\nBe brief.");
    }
}
