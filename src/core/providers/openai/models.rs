//! Wire types for the OpenAI-compatible chat completions API

use crate::core::types::ChatMessage;
use serde::{Deserialize, Serialize};

/// Request body for `POST {base_url}/chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Full conversation, system instruction included
    pub messages: &'a [ChatMessage],
}

/// Response body of a non-streaming completion
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated completions; the gateway only uses the first
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated assistant message
    pub message: CompletionMessage,
}

/// Assistant message inside a completion choice
#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    /// Reply text; absent for non-text completions
    #[serde(default)]
    pub content: Option<String>,
}
