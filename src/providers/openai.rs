use serde::Serialize;
use serde_json::Value;

use crate::server::chat_request::{ChatMessage, ChatRequest};

const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Legacy-path upstream request: the message list goes through unmodified
/// (this API accepts inline `system` roles and has no alternation rule).
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

pub fn build_chat_completion_request(request: &ChatRequest, model: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: request.messages.clone(),
        max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
    }
}

/// The upstream body is already in the shape the frontend expects, so it is
/// relayed verbatim instead of re-wrapped.
pub async fn send_chat_completions(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    request: &ChatCompletionRequest,
) -> Result<Value, reqwest::Error> {
    let url = format!("{}/v1/chat/completions", base_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await?;

    response.json::<Value>().await
}
