use super::*;
use crate::schema::GameBotConfig;
use gamebot_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_gamebot_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
temperature = 0.2

[server]
port = 9000
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.model.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.server.port, 9000);
    // Defaults preserved
    assert_eq!(config.model.name, "gemini-2.0-flash");
    assert_eq!(config.context.max_turns, 20);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn create_default_config_writes_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let defaults = GameBotConfig::default();
    assert_eq!(config.model.name, defaults.model.name);
    assert_eq!(config.server.port, defaults.server.port);
    assert_eq!(config.persona.persona_text, defaults.persona.persona_text);
}

#[test]
fn default_template_parses_as_toml() {
    let content = super::template::default_config_toml();
    let parsed: Result<GameBotConfig, _> = toml::from_str(&content);
    assert!(parsed.is_ok());
}

#[test]
fn default_config_path_ends_with_gamebot_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("gamebot/config.toml"));
    }
}
