//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = GameBotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_persona_text() {
    let mut config = GameBotConfig::default();
    config.persona.persona_text = "  \n".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persona.persona_text is empty"));
}

#[test]
fn catches_missing_instructions() {
    let mut config = GameBotConfig::default();
    config.persona.instructions = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persona.instructions is empty"));
}

#[test]
fn blank_welcome_message_is_allowed() {
    let mut config = GameBotConfig::default();
    config.persona.welcome_message = String::new();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = GameBotConfig::default();
    config.model.temperature = 3.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = GameBotConfig::default();
    config.model.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_output_tokens"));
}

#[test]
fn catches_bad_base_url() {
    let mut config = GameBotConfig::default();
    config.model.base_url = "generativelanguage.googleapis.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.base_url"));
}

#[test]
fn catches_more_than_one_retry() {
    let mut config = GameBotConfig::default();
    config.retry.max_retries = 3;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("retry.max_retries"));
}

#[test]
fn catches_zero_context_budget() {
    let mut config = GameBotConfig::default();
    config.context.max_turns = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("context.max_turns"));
}

#[test]
fn catches_zero_tool_rounds() {
    let mut config = GameBotConfig::default();
    config.tools.max_tool_rounds = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("tools.max_tool_rounds"));
}

#[test]
fn catches_blank_catalog_entry() {
    let mut config = GameBotConfig::default();
    config.games.catalog.push(" ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("games.catalog[7]"));
}

#[test]
fn catches_privileged_port() {
    let mut config = GameBotConfig::default();
    config.server.port = 80;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GameBotConfig::default();
    config.context.max_turns = 0;
    config.server.max_sessions = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("context.max_turns"));
    assert!(err.contains("server.max_sessions"));
    assert!(err.contains("; "));
}
