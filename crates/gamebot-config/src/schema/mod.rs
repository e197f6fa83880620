//! Configuration schema types for GameBot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the reference deployment.

mod conversation;
mod games;
mod model;
mod persona;
mod server;
mod system;

pub use conversation::*;
pub use games::*;
pub use model::*;
pub use persona::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for GameBot.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameBotConfig {
    pub model: ModelConfig,
    pub retry: RetryConfig,
    pub persona: PersonaConfig,
    pub context: ContextConfig,
    pub tools: ToolsConfig,
    pub games: GamesConfig,
    pub server: ServerConfig,
    pub secrets: SecretsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
