//! The per-message exchange, including the tool-call loop.

use std::sync::Arc;

use tracing::debug;

use crate::request::ModelRequest;
use crate::{AiError, Message, ModelResponse, Role};

use super::manager::Session;
use super::types::ChatError;

impl Session {
    /// Record `text` as a user turn and get the assistant's reply.
    ///
    /// If the model calls tools, they are executed and the model is asked
    /// again, up to `max_tool_rounds` times. Tool exchanges only live in the
    /// outgoing request and never become turns. On error, the user turn stays
    /// and no assistant turn is added.
    pub async fn handle_user_message(&mut self, text: &str) -> Result<ModelResponse, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::Validation("message is empty".into()));
        }

        self.state.append(Role::User, text);

        let client = Arc::clone(&self.client);
        let tools = self.tools.clone();

        let mut request =
            ModelRequest::from_history(&self.template, self.state.history(), self.budget);
        if let Some(tools) = &tools {
            request = request.with_tools(tools.definitions());
        }

        debug!(
            session = %self.id,
            turns = request.turn_count(),
            "Sending model request"
        );

        let mut rounds = 0;
        loop {
            let response = client.ask(&request).await?;
            self.tracker.record(client.model_name(), &response.usage);

            let toolbox = match &tools {
                Some(toolbox) if !response.tool_calls.is_empty() => toolbox,
                _ => return self.finish(response),
            };

            rounds += 1;
            if rounds > self.max_tool_rounds {
                debug!(session = %self.id, "Max tool rounds reached, returning partial response");
                return self.finish(response);
            }

            request.push(Message::new(Role::Assistant, tool_call_text(&response)));

            for call in &response.tool_calls {
                let output = toolbox.execute(call).await;
                if let Some((model, usage)) = &output.usage {
                    self.tracker.record(model, usage);
                }
                request.push(Message::new(
                    Role::Tool,
                    format!("[Tool Result: {}]\n{}", call.name, output.text),
                ));
            }
        }
    }

    fn finish(&mut self, response: ModelResponse) -> Result<ModelResponse, ChatError> {
        if response.text.trim().is_empty() {
            return Err(AiError::Malformed("model returned no answer text".into()).into());
        }
        self.state.append(Role::Assistant, response.text.clone());
        Ok(response)
    }
}

/// Text standing in for an assistant message that only requested tools.
fn tool_call_text(response: &ModelResponse) -> String {
    if !response.text.trim().is_empty() {
        return response.text.clone();
    }
    response
        .tool_calls
        .iter()
        .map(|call| format!("[Tool Call: {}({})]", call.name, call.arguments))
        .collect::<Vec<_>>()
        .join("\n")
}
