use serde::{Deserialize, Serialize};

/// Relay chat request envelope.
///
/// Notes:
/// - The public `/api/ask-tessa` endpoint accepts the same OpenAI-style
///   message list regardless of which upstream flavor is configured; shape
///   differences are resolved in the provider builders.
/// - Beyond role validity nothing is checked here; the relay forwards what
///   it receives within the upstream's constraints.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Single-choice response envelope returned to the frontend whatever the
/// upstream replied with.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
}

impl NormalizedChatResponse {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: AssistantMessage {
                    role: Role::Assistant,
                    content: content.into(),
                },
            }],
        }
    }
}
