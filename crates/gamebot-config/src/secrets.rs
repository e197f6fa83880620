//! API key resolution.
//!
//! Resolution order:
//! 1. The configured environment variable (`GOOGLE_API_KEY` by default).
//!    A `.env` file loaded with [`load_dotenv`] fills this in without
//!    overriding variables already set in the real environment.
//! 2. The secret file (`secrets.api_key_file`, or
//!    `<config dir>/gamebot/secrets.toml`) with a `google_api_key` entry.
//!
//! A missing key is a fatal `ConfigError::MissingSecret`.

use std::fmt;
use std::path::{Path, PathBuf};

use gamebot_common::ConfigError;
use serde::Deserialize;
use tracing::{debug, info};

use crate::schema::SecretsConfig;
use crate::toml_loader;

/// An API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Deserialize)]
struct SecretFile {
    google_api_key: Option<String>,
}

/// Resolve the API key from the process environment and secret file.
pub fn resolve_api_key(secrets: &SecretsConfig) -> Result<ApiKey, ConfigError> {
    let env_value = std::env::var(&secrets.api_key_env).ok();
    let secret_file = match &secrets.api_key_file {
        Some(path) => Some(path.clone()),
        None => default_secret_path(),
    };
    resolve_api_key_from(&secrets.api_key_env, env_value, secret_file.as_deref())
}

/// Resolve the API key from explicit sources.
pub fn resolve_api_key_from(
    env_name: &str,
    env_value: Option<String>,
    secret_file: Option<&Path>,
) -> Result<ApiKey, ConfigError> {
    if let Some(key) = env_value.filter(|v| !v.trim().is_empty()) {
        debug!("API key taken from ${env_name}");
        return Ok(ApiKey::new(key.trim()));
    }

    if let Some(path) = secret_file {
        if let Some(key) = read_secret_file(path)? {
            debug!("API key taken from {}", path.display());
            return Ok(ApiKey::new(key));
        }
    }

    Err(ConfigError::MissingSecret(format!(
        "set {env_name} in the environment or a .env file, or add google_api_key to {}",
        secret_file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "secrets.toml".into())
    )))
}

/// Read `google_api_key` from a secret TOML file. A missing file is `Ok(None)`.
fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;
    let file: SecretFile = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("failed to parse {}: {e}", path.display()))
    })?;

    Ok(file
        .google_api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty()))
}

fn default_secret_path() -> Option<PathBuf> {
    toml_loader::config_dir()
        .ok()
        .map(|dir| dir.join("secrets.toml"))
}

/// Parse `KEY=VALUE` lines from a `.env` file body.
///
/// Blank lines and `#` comments are skipped; surrounding quotes are stripped.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load a `.env` file into the process environment.
///
/// Variables already present in the environment win. Returns how many
/// variables were set; a missing file sets none.
pub fn load_dotenv(path: &Path) -> usize {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return 0;
    };

    let mut applied = 0;
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            applied += 1;
        }
    }
    info!("loaded {applied} variable(s) from {}", path.display());
    applied
}
