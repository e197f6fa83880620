//! Board-game tool definitions.

use crate::ToolDefinition;

pub const GET_LIST_GAME: &str = "get_list_game";
pub const SEARCH_GAME_ONLINE: &str = "search_game_online";

/// The tools GameBot exposes to the model.
pub fn game_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_LIST_GAME.to_string(),
            description: "List the board games GameBot knows about.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: SEARCH_GAME_ONLINE.to_string(),
            description: "Search online for a short description of a board game that is not in the known list.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "game_name": {
                        "type": "string",
                        "description": "Name of the board game"
                    }
                },
                "required": ["game_name"]
            }),
        },
    ]
}

/// Convert a tool definition to a Gemini function declaration.
///
/// Gemini rejects an object schema with no properties, so parameterless
/// tools omit `parameters` entirely.
pub fn to_gemini_tool(tool: &ToolDefinition) -> serde_json::Value {
    let has_properties = tool.parameters["properties"]
        .as_object()
        .is_some_and(|props| !props.is_empty());

    if has_properties {
        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        })
    } else {
        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
        })
    }
}
