//! Chat relay endpoint
//!
//! Accepts either a bare `message` string (shorthand for a one-element
//! user history) or a full `messages` history ending in a user message,
//! prepends the fixed system instruction, and forwards the conversation
//! to the chat provider.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::types::{ChatMessage, MessageRole};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// Instruction prepended to every conversation before it is forwarded
pub const SYSTEM_PROMPT: &str =
    "Eres un asistente virtual amable y conciso. Responde siempre en español.";

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Single-message shorthand
    #[serde(default)]
    pub message: Option<String>,
    /// Full conversation history; the last message must be from the user
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// First completion's text
    pub response: String,
}

impl ChatRequest {
    /// Validate the request and build the caller-supplied history
    ///
    /// Rejected requests never reach the upstream provider.
    fn into_history(self) -> Result<Vec<ChatMessage>, GatewayError> {
        if self.message.is_some() && self.messages.is_some() {
            return Err(GatewayError::Validation(
                "provide either \"message\" or \"messages\", not both".to_string(),
            ));
        }

        if let Some(messages) = self.messages {
            if messages.is_empty() {
                return Err(GatewayError::Validation(
                    "messages must not be empty".to_string(),
                ));
            }
            if messages.last().map(|m| m.role) != Some(MessageRole::User) {
                return Err(GatewayError::Validation(
                    "the last message must have role \"user\"".to_string(),
                ));
            }
            return Ok(messages);
        }

        match self.message {
            Some(message) if !message.trim().is_empty() => Ok(vec![ChatMessage::user(message)]),
            _ => Err(GatewayError::Validation(
                "no message was provided".to_string(),
            )),
        }
    }
}

/// Chat endpoint
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    let history = request.into_inner().into_history()?;

    info!(messages = history.len(), "Chat request");

    let mut conversation = Vec::with_capacity(history.len() + 1);
    conversation.push(ChatMessage::system(SYSTEM_PROMPT));
    conversation.extend(history);

    let response = state.chat.complete(&conversation).await?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
