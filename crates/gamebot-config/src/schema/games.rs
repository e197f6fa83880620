//! Game catalog configuration.

use serde::{Deserialize, Serialize};

/// Games GameBot knows without searching online.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    pub catalog: Vec<String>,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            catalog: ["Monopoly", "Scrabble", "Chess", "Cluedo", "Uno", "Mahjong", "Mikado"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
