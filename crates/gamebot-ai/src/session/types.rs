//! Session error type.

use crate::{AiError, ErrorKind};

/// Failure of a single user exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Rejected locally before any state change or network call.
    #[error("invalid input: {0}")]
    Validation(String),
    #[error(transparent)]
    Model(#[from] AiError),
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Validation(_) => ErrorKind::Validation,
            ChatError::Model(e) => e.kind(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}
