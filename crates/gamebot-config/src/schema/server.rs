//! Session server configuration.

use serde::{Deserialize, Serialize};

/// Network surface the presentation layer connects to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Listening port (valid range: 1024-65535).
    pub port: u32,
    /// Concurrent sessions accepted (valid range: 1-10000).
    pub max_sessions: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8501,
            max_sessions: 64,
        }
    }
}
