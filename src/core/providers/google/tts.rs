//! Google Cloud Text-to-Speech client
//!
//! Calls the `text:synthesize` REST endpoint requesting a neutral-gender
//! Spanish voice and MP3 encoding, and decodes the base64 audio payload.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use super::auth::GoogleAuth;
use crate::utils::error::{GatewayError, Result};

/// Language speech is synthesized in
pub const SYNTHESIS_LANGUAGE: &str = "es-ES";

/// Client for the Text-to-Speech REST API
#[derive(Debug)]
pub struct TtsClient {
    http: reqwest::Client,
    auth: Arc<GoogleAuth>,
    endpoint: String,
}

/// Response body of `text:synthesize`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl TtsClient {
    /// Create a new synthesis client
    pub fn new(auth: Arc<GoogleAuth>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// Synthesize Spanish speech and return the MP3 bytes
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let token = self.auth.token().await?;

        let url = format!("{}/text:synthesize", self.endpoint);
        let body = json!({
            "input": {"text": text},
            "voice": {
                "languageCode": SYNTHESIS_LANGUAGE,
                "ssmlGender": "NEUTRAL",
            },
            "audioConfig": {"audioEncoding": "MP3"},
        });

        debug!(chars = text.len(), "Forwarding synthesis request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Synthesis(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Synthesis(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let synthesis: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Synthesis(format!("invalid provider response: {}", e)))?;

        BASE64
            .decode(synthesis.audio_content)
            .map_err(|e| GatewayError::Synthesis(format!("invalid audio payload: {}", e)))
    }
}
