//! System configuration types: secrets and logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the API key is looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Environment variable holding the key.
    pub api_key_env: String,
    /// Secret TOML file with a `google_api_key` entry. Defaults to
    /// `<config dir>/gamebot/secrets.toml` when unset.
    pub api_key_file: Option<PathBuf>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".into(),
            api_key_file: None,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for the gamebot crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "gamebot=debug",
            LogLevel::Info => "gamebot=info",
            LogLevel::Warning => "gamebot=warn",
            LogLevel::Error => "gamebot=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
