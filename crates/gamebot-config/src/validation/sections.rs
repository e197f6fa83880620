//! Per-section validators.

use crate::schema::GameBotConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Validate model endpoint constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &GameBotConfig) {
    let model = &config.model;
    validate_not_blank(errors, "model.name", &model.name);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.max_output_tokens",
        model.max_output_tokens,
        1,
        8192,
    );
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        60,
    );
    if !(model.base_url.starts_with("http://") || model.base_url.starts_with("https://")) {
        errors.push(format!(
            "model.base_url = {:?} must start with http:// or https://",
            model.base_url
        ));
    }
}

/// Validate retry constraints.
pub(crate) fn validate_retry(errors: &mut Vec<String>, config: &GameBotConfig) {
    validate_range(errors, "retry.max_retries", config.retry.max_retries, 0, 1);
    validate_range(errors, "retry.backoff_ms", config.retry.backoff_ms, 0, 10_000);
}

/// The prompt template is required; blank text is fatal at startup.
pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &GameBotConfig) {
    validate_not_blank(errors, "persona.persona_text", &config.persona.persona_text);
    validate_not_blank(errors, "persona.instructions", &config.persona.instructions);
}

/// Validate context budget constraints.
pub(crate) fn validate_context(errors: &mut Vec<String>, config: &GameBotConfig) {
    validate_range(errors, "context.max_turns", config.context.max_turns, 1, 1000);
}

/// Validate tool loop constraints.
pub(crate) fn validate_tools(errors: &mut Vec<String>, config: &GameBotConfig) {
    validate_range(
        errors,
        "tools.max_tool_rounds",
        config.tools.max_tool_rounds,
        1,
        100,
    );
    if config.tools.enabled {
        validate_not_blank(errors, "tools.search_model", &config.tools.search_model);
    }
}

/// Validate the game catalog.
pub(crate) fn validate_games(errors: &mut Vec<String>, config: &GameBotConfig) {
    for (i, game) in config.games.catalog.iter().enumerate() {
        validate_not_blank(errors, &format!("games.catalog[{i}]"), game);
    }
}

/// Validate server constraints.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &GameBotConfig) {
    validate_not_blank(errors, "server.host", &config.server.host);
    validate_range(errors, "server.port", config.server.port, 1024, 65535);
    validate_range(
        errors,
        "server.max_sessions",
        config.server.max_sessions,
        1,
        10_000,
    );
}
