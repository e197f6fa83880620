//! Append-only conversation log for one session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Role;

/// One message exchanged in a conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    role: Role,
    text: String,
    sequence_number: u64,
    created_at: DateTime<Utc>,
}

impl Turn {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Ordered turns of the active session.
///
/// Sequence numbers start at 1 and strictly increase; turns are only ever
/// removed all at once by [`ConversationState::reset`].
#[derive(Debug, Clone)]
pub struct ConversationState {
    turns: Vec<Turn>,
    next_sequence: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Stamp a new turn with the next sequence number and append it.
    pub fn append(&mut self, role: Role, text: impl Into<String>) -> &Turn {
        let turn = Turn {
            role,
            text: text.into(),
            sequence_number: self.next_sequence,
            created_at: Utc::now(),
        };
        self.next_sequence += 1;
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// All turns in insertion order.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    /// Drop every turn and start numbering again.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.next_sequence = 1;
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_increasing_sequence_numbers() {
        let mut state = ConversationState::new();
        let first = state.append(Role::User, "hi").sequence_number();
        let second = state.append(Role::Assistant, "hello").sequence_number();
        let third = state.append(Role::User, "rules of chess?").sequence_number();

        assert_eq!(first, 1);
        assert!(second > first);
        assert!(third > second);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn history_preserves_insertion_order() {
        let mut state = ConversationState::new();
        state.append(Role::User, "a");
        state.append(Role::Assistant, "b");

        let texts: Vec<&str> = state.history().iter().map(Turn::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        // Restartable view.
        let again: Vec<&str> = state.history().iter().map(Turn::text).collect();
        assert_eq!(texts, again);
        assert_eq!(state.last().map(Turn::role), Some(Role::Assistant));
    }

    #[test]
    fn reset_empties_history() {
        let mut state = ConversationState::new();
        state.append(Role::User, "a");
        state.append(Role::Assistant, "b");

        state.reset();
        assert!(state.history().is_empty());
        assert!(state.is_empty());

        state.reset();
        assert!(state.history().is_empty());
        assert_eq!(state.append(Role::User, "fresh").sequence_number(), 1);
    }

    #[test]
    fn turn_timestamps_do_not_go_backwards() {
        let mut state = ConversationState::new();
        state.append(Role::User, "a");
        state.append(Role::Assistant, "b");
        let turns = state.history();
        assert!(turns[1].created_at() >= turns[0].created_at());
    }

    #[test]
    fn turn_serializes_role_lowercase() {
        let mut state = ConversationState::new();
        let turn = state.append(Role::User, "hi").clone();
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["text"], "hi");
        assert_eq!(json["sequence_number"], 1);
    }
}
