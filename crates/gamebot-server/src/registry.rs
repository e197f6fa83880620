//! Registry of active session ids, bounded by `server.max_sessions`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use gamebot_common::SessionId;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("session limit reached ({0} active)")]
    Full(usize),
    #[error("session {0} is already registered")]
    Duplicate(SessionId),
}

struct Entry {
    peer: SocketAddr,
    registered_at: Instant,
}

/// Thread-safe set of live sessions. Nothing else is shared across sessions.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    pub async fn register(&self, id: &SessionId, peer: SocketAddr) -> Result<(), RegistryError> {
        let mut map = self.sessions.write().await;
        if map.contains_key(id) {
            return Err(RegistryError::Duplicate(id.clone()));
        }
        if map.len() >= self.max_sessions {
            return Err(RegistryError::Full(map.len()));
        }
        map.insert(
            id.clone(),
            Entry {
                peer,
                registered_at: Instant::now(),
            },
        );
        Ok(())
    }

    /// Move a registration to a new id after a reset. Does not count against
    /// the limit.
    pub async fn rotate(&self, old: &SessionId, new: &SessionId) {
        let mut map = self.sessions.write().await;
        if let Some(entry) = map.remove(old) {
            map.insert(new.clone(), entry);
        }
    }

    pub async fn unregister(&self, id: &SessionId) {
        if let Some(entry) = self.sessions.write().await.remove(id) {
            tracing::debug!(
                session = %id,
                peer = %entry.peer,
                age_secs = entry.registered_at.elapsed().as_secs(),
                "Session unregistered"
            );
        }
    }

    #[cfg(test)]
    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}
