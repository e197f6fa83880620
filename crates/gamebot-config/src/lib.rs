//! GameBot configuration system.
//!
//! TOML-based configuration with full validation and API-key resolution.
//! Every section uses `serde(default)` so partial configs work out of the box;
//! only the API key has no default and must come from the environment or a
//! secret file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gamebot_config::{load_config, secrets};
//!
//! let config = load_config(None).expect("failed to load config");
//! let key = secrets::resolve_api_key(&config.secrets).expect("GOOGLE_API_KEY not set");
//! println!("model: {}", config.model.name);
//! # let _ = key;
//! ```

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::GameBotConfig;
pub use secrets::ApiKey;

use std::path::Path;

use gamebot_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing default file is created with documented defaults. The result is
/// always validated: an invalid config is an error, never silently replaced.
pub fn load_config(path: Option<&Path>) -> Result<GameBotConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GameBotConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&GameBotConfig::default());
        for section in [
            "\"model\"",
            "\"retry\"",
            "\"persona\"",
            "\"context\"",
            "\"tools\"",
            "\"games\"",
            "\"server\"",
            "\"secrets\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn load_config_rejects_blank_persona() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[persona]\ninstructions = \"   \"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("persona.instructions"));
    }

    #[test]
    fn load_config_accepts_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[context]\nmax_turns = 10\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.context.max_turns, 10);
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&GameBotConfig::default());
        let parsed: GameBotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.name, "gemini-2.0-flash");
        assert_eq!(parsed.games.catalog.len(), 7);
    }
}
