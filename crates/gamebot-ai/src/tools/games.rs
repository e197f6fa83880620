//! Tool implementations backed by the game catalog and a search model.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::request::ModelRequest;
use crate::{ModelClient, ToolCall, ToolDefinition};

use super::definitions::{game_tools, GET_LIST_GAME, SEARCH_GAME_ONLINE};
use super::{ToolBox, ToolOutput};

/// `get_list_game` and `search_game_online`.
pub struct GameTools {
    catalog: Vec<String>,
    /// Client used for grounded web searches. `None` disables online search.
    searcher: Option<Arc<dyn ModelClient>>,
}

impl GameTools {
    pub fn new(catalog: Vec<String>) -> Self {
        Self {
            catalog,
            searcher: None,
        }
    }

    pub fn with_searcher(mut self, searcher: Arc<dyn ModelClient>) -> Self {
        self.searcher = Some(searcher);
        self
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    fn list_games(&self) -> String {
        if self.catalog.is_empty() {
            return "GameBot does not know any games yet.".to_string();
        }
        let lines: Vec<String> = self.catalog.iter().map(|g| format!("- {g}")).collect();
        format!("Known games:\n{}", lines.join("\n"))
    }

    async fn search_online(&self, arguments: &serde_json::Value) -> ToolOutput {
        let game_name = match arguments["game_name"].as_str().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return ToolOutput::plain("Error: missing 'game_name' argument"),
        };

        let Some(searcher) = &self.searcher else {
            return ToolOutput::plain(format!(
                "Online search is not available. No information found for '{game_name}'."
            ));
        };

        let request = ModelRequest::single_prompt(format!(
            "Can you give me a short description of the board game '{game_name}'?"
        ))
        .with_web_search();

        match searcher.ask(&request).await {
            Ok(response) => ToolOutput {
                text: response.text,
                usage: Some((searcher.model_name().to_string(), response.usage)),
            },
            Err(e) => {
                warn!(game = %game_name, error = %e, "Online game search failed");
                ToolOutput::plain(format!(
                    "Search failed for '{game_name}': {}",
                    e.kind().user_message()
                ))
            }
        }
    }
}

#[async_trait]
impl ToolBox for GameTools {
    fn definitions(&self) -> Vec<ToolDefinition> {
        game_tools()
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        debug!(tool = %call.name, "Executing tool");
        match call.name.as_str() {
            GET_LIST_GAME => ToolOutput::plain(self.list_games()),
            SEARCH_GAME_ONLINE => self.search_online(&call.arguments).await,
            other => ToolOutput::plain(format!("Error: unknown tool '{other}'")),
        }
    }
}
