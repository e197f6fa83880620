//! Prompt template configuration.

use serde::{Deserialize, Serialize};

/// Fixed instruction text sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    /// Who the assistant is. Required, must not be blank.
    pub persona_text: String,
    /// Domain framing and behavioural rules. Required, must not be blank.
    pub instructions: String,
    /// Shown when a session starts; never sent to the model.
    pub welcome_message: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            persona_text: "You are GameBot, an interactive board game expert. You answer \
                questions about board game rules, strategies, and history. Stay on the \
                topic of board games; chatting about the games and their history is fine."
                .into(),
            instructions: "Call `get_list_game` to see which games are in the local list. \
                If the user asks about a game that is not in the list, do not say it is \
                unavailable: call `search_game_online` with the game name and use the \
                result to help them. For games in the list, answer detailed questions about \
                rules, pieces, or strategy from your own knowledge.\n\
                Be proactive and helpful, and respond in the user's language.\n\
                Keep your answers concise and friendly.\n\
                If a tool is unavailable, say so plainly."
                .into(),
            welcome_message: "Welcome to GameBot! How can I help you with board games today?"
                .into(),
        }
    }
}
