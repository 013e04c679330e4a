use serde::{Deserialize, Serialize};

use crate::server::chat_request::{ChatRequest, NormalizedChatResponse, Role};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const DEFAULT_TEMPERATURE: f64 = 0.3;
const SHORT_BUDGET: u32 = 1500;
const LONG_BUDGET: u32 = 4096;
const LONG_CONTENT_CHARS: usize = 5000;
const CONTINUATION_STUB: &str = "(continued)";
const UPSTREAM_ERROR_REPLY: &str =
    "I'm having trouble processing that request. Please try again in a moment.";
const EMPTY_CONTENT_REPLY: &str = "I couldn't generate a response.";

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system: String,
    pub messages: Vec<AnthropicMessage>,
}

/// Conversation message as the Messages API accepts it: `user`/`assistant`
/// only, `system` travels in the top-level field instead.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Response content block. Only the text payload matters to the relay; the
/// block's `type` tag is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

/// Builds the upstream Messages call from a provider-agnostic request.
///
/// The upstream rejects `system` roles inside the conversation and requires
/// it to open with a `user` turn, so the first system message is hoisted into
/// the top-level field, remaining system messages are dropped, and a
/// `"(continued)"` user stub is prepended when the conversation would
/// otherwise open with `assistant`.
pub fn build_messages_request(request: &ChatRequest, model: &str) -> MessagesRequest {
    let system = request
        .messages
        .iter()
        .find(|m| m.role == Role::System)
        .map(|m| m.content.clone())
        .unwrap_or_default();

    let mut conversation: Vec<AnthropicMessage> = request
        .messages
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| AnthropicMessage {
            role: m.role,
            content: m.content.clone(),
        })
        .collect();

    if conversation.first().is_some_and(|m| m.role == Role::Assistant) {
        conversation.insert(
            0,
            AnthropicMessage {
                role: Role::User,
                content: CONTINUATION_STUB.to_string(),
            },
        );
    }

    // Long conversation content means a long answer is expected.
    let max_tokens = request.max_tokens.unwrap_or_else(|| {
        let long_form = conversation
            .iter()
            .any(|m| m.content.chars().count() > LONG_CONTENT_CHARS);
        if long_form { LONG_BUDGET } else { SHORT_BUDGET }
    });

    MessagesRequest {
        model: model.to_string(),
        max_tokens,
        temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        system,
        messages: conversation,
    }
}

/// Folds an upstream reply into the single-choice envelope. An embedded
/// error object is logged and replaced with a user-safe message rather than
/// surfaced to the caller.
pub fn normalize_response(response: MessagesResponse) -> NormalizedChatResponse {
    if response.kind == "error" {
        match &response.error {
            Some(e) => tracing::error!("Anthropic API error: {}: {}", e.kind, e.message),
            None => tracing::error!("Anthropic API error: unspecified"),
        }
        return NormalizedChatResponse::assistant(UPSTREAM_ERROR_REPLY);
    }

    let content = response
        .content
        .first()
        .and_then(|block| block.text.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| EMPTY_CONTENT_REPLY.to_string());

    NormalizedChatResponse::assistant(content)
}

pub async fn send_messages(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    request: &MessagesRequest,
) -> Result<MessagesResponse, reqwest::Error> {
    let url = format!("{}/v1/messages", base_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .header("x-api-key", api_key)
        .header("Content-Type", "application/json")
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(request)
        .send()
        .await?;

    response.json::<MessagesResponse>().await
}
