//! gamebot: WebSocket server for the GameBot board-game assistant.
//!
//! Each connection gets its own conversation session backed by Google
//! Gemini. Configuration errors abort startup before any port is bound.

mod cli;
mod connection;
mod protocol;
mod registry;
mod state;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use gamebot_ai::TemplateStore;
use gamebot_common::ConfigError;
use gamebot_config::schema::LogLevel;
use gamebot_config::{secrets, validation, GameBotConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::state::ServerState;

/// `RUST_LOG` wins, then `--log-level`, then `logging.level`.
fn init_tracing(cli_level: Option<&str>, config_level: LogLevel) {
    let fallback = cli_level.unwrap_or(config_level.directive());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Apply CLI overrides, then re-validate so overrides obey the same ranges.
fn apply_overrides(args: &Args, config: &mut GameBotConfig) -> Result<(), ConfigError> {
    if let Some(port) = args.port {
        config.server.port = u32::from(port);
    }
    validation::validate(config)
}

async fn run(config: GameBotConfig) -> gamebot_common::Result<()> {
    tracing::debug!(config = %gamebot_config::config_to_json(&config), "Effective configuration");

    let api_key = secrets::resolve_api_key(&config.secrets)?;
    let templates = TemplateStore::load(&config.persona)?;
    let state = Arc::new(ServerState::new(config, templates, api_key));

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(
        model = %state.config.model.name,
        max_sessions = state.registry.max_sessions(),
        "GameBot listening on {addr}"
    );

    tokio::select! {
        _ = connection::serve(listener, Arc::clone(&state)) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!(sessions = state.registry.count().await, "Shutting down");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before anything reads the environment or spawns threads.
    let dotenv_vars = secrets::load_dotenv(Path::new(".env"));

    let args = cli::parse();
    let config = gamebot_config::load_config(args.config.as_deref());

    let config_level = config
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_tracing(args.log_level.as_deref(), config_level);

    tracing::info!("GameBot v{} starting...", env!("CARGO_PKG_VERSION"));
    if dotenv_vars > 0 {
        tracing::debug!(vars = dotenv_vars, "Loaded .env");
    }

    let config = config.and_then(|mut config| {
        apply_overrides(&args, &mut config)?;
        Ok(config)
    });

    let result = match config {
        Ok(config) => match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(run(config)),
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("GameBot failed to start: {e}");
            ExitCode::FAILURE
        }
    }
}
