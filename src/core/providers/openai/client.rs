//! Chat-completion client
//!
//! Thin `reqwest` handle around the remote chat-completion API; given a
//! list of role-tagged messages, returns the first completion's text.

use crate::config::ChatConfig;
use crate::core::types::ChatMessage;
use crate::utils::error::{GatewayError, Result};
use tracing::debug;

use super::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Client for the OpenAI-compatible chat provider
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ChatClient {
    /// Create a new chat client from the provider configuration
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Forward a conversation and return the first completion's text
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(model = %self.model, messages = messages.len(), "Forwarding chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ChatUpstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::ChatUpstream(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ChatUpstream(format!("invalid provider response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::ChatUpstream("provider returned no completion".to_string()))
    }
}
