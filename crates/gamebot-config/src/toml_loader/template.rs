//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# GameBot Configuration
# Only override what you want to change -- missing fields use defaults.
# The API key is never stored here: set GOOGLE_API_KEY (or a .env file),
# or put `google_api_key = "..."` in secrets.toml next to this file.

[model]
# name = "gemini-2.0-flash"
# temperature = 0.7              # 0.0-2.0
# max_output_tokens = 2048       # 1-8192
# base_url = "https://generativelanguage.googleapis.com"
# request_timeout_secs = 60      # 1-600
# connect_timeout_secs = 10      # 1-60

[retry]
# max_retries = 1                # 0-1, only for rate limiting / unavailability
# backoff_ms = 500               # 0-10000

[persona]
# persona_text = "You are GameBot, ..."
# instructions = "..."
# welcome_message = "Welcome to GameBot! ..."

[context]
# max_turns = 20                 # 1-1000, oldest turns dropped first

[tools]
# enabled = true
# max_tool_rounds = 10           # 1-100
# search_model = "gemini-2.0-flash"

[games]
# catalog = ["Monopoly", "Scrabble", "Chess", "Cluedo", "Uno", "Mahjong", "Mikado"]

[server]
# host = "0.0.0.0"
# port = 8501                    # 1024-65535
# max_sessions = 64              # 1-10000

[secrets]
# api_key_env = "GOOGLE_API_KEY"
# api_key_file = "/path/to/secrets.toml"

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
