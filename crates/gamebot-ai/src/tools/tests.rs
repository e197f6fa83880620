use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::request::ModelRequest;
use crate::{AiError, ModelClient, ModelResponse, TokenUsage};

struct RecordingSearcher {
    reply: Result<ModelResponse, AiError>,
    seen: Mutex<Vec<ModelRequest>>,
}

#[async_trait]
impl ModelClient for RecordingSearcher {
    async fn ask(&self, request: &ModelRequest) -> Result<ModelResponse, AiError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }

    fn model_name(&self) -> &str {
        "search-test"
    }
}

fn call(name: &str, arguments: serde_json::Value) -> ToolCall {
    ToolCall {
        id: "call-1".into(),
        name: name.into(),
        arguments,
    }
}

#[test]
fn definitions_cover_both_tools() {
    let names: Vec<String> = game_tools().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["get_list_game", "search_game_online"]);
}

#[test]
fn parameterless_tool_omits_parameters_for_gemini() {
    let tools = game_tools();
    let list = to_gemini_tool(&tools[0]);
    assert!(list.get("parameters").is_none());

    let search = to_gemini_tool(&tools[1]);
    assert_eq!(search["parameters"]["required"][0], "game_name");
}

#[tokio::test]
async fn list_returns_catalog() {
    let tools = GameTools::new(vec!["Chess".into(), "Uno".into()]);
    let out = tools.execute(&call("get_list_game", serde_json::json!({}))).await;
    assert!(out.text.contains("- Chess"));
    assert!(out.text.contains("- Uno"));
}

#[tokio::test]
async fn search_uses_web_grounding() {
    let searcher = Arc::new(RecordingSearcher {
        reply: Ok(ModelResponse {
            text: "Catan is a trading game.".into(),
            tool_calls: Vec::new(),
            usage: TokenUsage {
                input_tokens: 40,
                output_tokens: 12,
            },
        }),
        seen: Mutex::new(Vec::new()),
    });
    let tools = GameTools::new(Vec::new()).with_searcher(searcher.clone());

    let out = tools
        .execute(&call(
            "search_game_online",
            serde_json::json!({ "game_name": "Catan" }),
        ))
        .await;

    assert_eq!(out.text, "Catan is a trading game.");
    let (model, usage) = out.usage.unwrap();
    assert_eq!(model, "search-test");
    assert_eq!(usage.total_tokens(), 52);
    let seen = searcher.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].web_search);
    assert!(seen[0].messages[0].content.contains("'Catan'"));
}

#[tokio::test]
async fn search_failure_is_reported_as_output() {
    let searcher = Arc::new(RecordingSearcher {
        reply: Err(AiError::RateLimited),
        seen: Mutex::new(Vec::new()),
    });
    let tools = GameTools::new(Vec::new()).with_searcher(searcher);

    let out = tools
        .execute(&call(
            "search_game_online",
            serde_json::json!({ "game_name": "Catan" }),
        ))
        .await;
    assert!(out.text.starts_with("Search failed for 'Catan'"));
    assert!(out.usage.is_none());
}

#[tokio::test]
async fn search_without_searcher_or_name() {
    let tools = GameTools::new(Vec::new());
    let out = tools
        .execute(&call("search_game_online", serde_json::json!({ "game_name": "Go" })))
        .await;
    assert!(out.text.contains("not available"));

    let out = tools
        .execute(&call("search_game_online", serde_json::json!({})))
        .await;
    assert!(out.text.contains("missing 'game_name'"));
}

#[tokio::test]
async fn unknown_tool_is_reported() {
    let tools = GameTools::new(Vec::new());
    let out = tools.execute(&call("roll_dice", serde_json::json!({}))).await;
    assert_eq!(out, ToolOutput::plain("Error: unknown tool 'roll_dice'"));
}
