//! Full configuration validation.
//!
//! Validates numeric ranges and required text. Each section has its own
//! function; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::GameBotConfig;
use gamebot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GameBotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_model(&mut errors, config);
    sections::validate_retry(&mut errors, config);
    sections::validate_persona(&mut errors, config);
    sections::validate_context(&mut errors, config);
    sections::validate_tools(&mut errors, config);
    sections::validate_games(&mut errors, config);
    sections::validate_server(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
