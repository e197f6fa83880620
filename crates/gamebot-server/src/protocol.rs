//! JSON wire protocol between the chat UI and the server.

use gamebot_ai::{ErrorKind, Turn};
use serde::{Deserialize, Serialize};

/// Messages a client sends.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientFrame {
    #[serde(rename = "chat")]
    Chat { text: String },

    #[serde(rename = "reset")]
    Reset,

    #[serde(rename = "history")]
    History,
}

/// Messages the server sends back.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ServerFrame {
    #[serde(rename = "welcome")]
    Welcome {
        session_id: String,
        text: String,
        games: Vec<String>,
    },

    /// A chat message was accepted and a reply is on its way.
    #[serde(rename = "thinking")]
    Thinking,

    #[serde(rename = "reply")]
    Reply { text: String, sequence_number: u64 },

    #[serde(rename = "error")]
    Error { kind: FrameError, message: String },

    #[serde(rename = "reset_done")]
    ResetDone { session_id: String, text: String },

    #[serde(rename = "history")]
    History { turns: Vec<Turn> },
}

/// Error codes carried by [`ServerFrame::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameError {
    Validation,
    RateLimited,
    Unauthorized,
    Unavailable,
    Malformed,
    /// A frame arrived while a reply was still pending.
    Busy,
    /// The frame could not be decoded.
    BadFrame,
    /// The server is at its session limit.
    Capacity,
}

impl From<ErrorKind> for FrameError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Validation => FrameError::Validation,
            ErrorKind::RateLimited => FrameError::RateLimited,
            ErrorKind::Unauthorized => FrameError::Unauthorized,
            ErrorKind::Unavailable => FrameError::Unavailable,
            ErrorKind::Malformed => FrameError::Malformed,
        }
    }
}

impl ServerFrame {
    pub fn error(kind: impl Into<FrameError>, message: impl Into<String>) -> Self {
        ServerFrame::Error {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn busy() -> Self {
        Self::error(
            FrameError::Busy,
            "GameBot is still answering your previous message.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamebot_ai::{ConversationState, Role};

    #[test]
    fn parses_client_frames() {
        let chat: ClientFrame =
            serde_json::from_str(r#"{"type":"chat","text":"Rules of Chess?"}"#).unwrap();
        assert_eq!(
            chat,
            ClientFrame::Chat {
                text: "Rules of Chess?".into()
            }
        );
        let reset: ClientFrame = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(reset, ClientFrame::Reset);
        let history: ClientFrame = serde_json::from_str(r#"{"type":"history"}"#).unwrap();
        assert_eq!(history, ClientFrame::History);
    }

    #[test]
    fn rejects_unknown_frames() {
        assert!(serde_json::from_str::<ClientFrame>(r#"{"type":"dance"}"#).is_err());
        assert!(serde_json::from_str::<ClientFrame>(r#"{"type":"chat"}"#).is_err());
        assert!(serde_json::from_str::<ClientFrame>("not json").is_err());
    }

    #[test]
    fn serializes_reply_and_error() {
        let reply = serde_json::to_value(ServerFrame::Reply {
            text: "Checkmate.".into(),
            sequence_number: 2,
        })
        .unwrap();
        assert_eq!(
            reply,
            serde_json::json!({ "type": "reply", "text": "Checkmate.", "sequence_number": 2 })
        );

        let error = serde_json::to_value(ServerFrame::error(ErrorKind::RateLimited, "slow down"))
            .unwrap();
        assert_eq!(
            error,
            serde_json::json!({ "type": "error", "kind": "rate_limited", "message": "slow down" })
        );

        let busy = serde_json::to_value(ServerFrame::busy()).unwrap();
        assert_eq!(busy["kind"], "busy");

        let thinking = serde_json::to_value(ServerFrame::Thinking).unwrap();
        assert_eq!(thinking, serde_json::json!({ "type": "thinking" }));
    }

    #[test]
    fn serializes_history_turns() {
        let mut state = ConversationState::new();
        state.append(Role::User, "Hi");
        state.append(Role::Assistant, "Hello!");

        let frame = serde_json::to_value(ServerFrame::History {
            turns: state.history().to_vec(),
        })
        .unwrap();

        let turns = frame["turns"].as_array().unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["role"], "user");
        assert_eq!(turns[1]["role"], "assistant");
        assert_eq!(turns[1]["sequence_number"], 2);
        assert!(turns[0]["created_at"].is_string());
    }
}
