//! Google Cloud Speech-to-Text client
//!
//! Calls the `speech:recognize` REST endpoint. Recognition input is
//! assumed LINEAR16 PCM, 16 kHz, mono, Spanish; no encoding validation is
//! performed beyond what the service enforces.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use super::auth::GoogleAuth;
use crate::utils::error::{GatewayError, Result};

/// Language recognition is performed in
pub const RECOGNITION_LANGUAGE: &str = "es-ES";
/// Expected sample rate of recognition input
pub const RECOGNITION_SAMPLE_RATE: u32 = 16_000;

/// Client for the Speech-to-Text REST API
#[derive(Debug)]
pub struct SpeechClient {
    http: reqwest::Client,
    auth: Arc<GoogleAuth>,
    endpoint: String,
}

/// Response body of `speech:recognize`
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    transcript: String,
}

impl SpeechClient {
    /// Create a new recognition client
    pub fn new(auth: Arc<GoogleAuth>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// Recognize Spanish LINEAR16 audio
    ///
    /// Returns the transcript of the first alternative of the first
    /// result, or `None` when the service recognized nothing.
    pub async fn recognize(&self, audio: &[u8]) -> Result<Option<String>> {
        let token = self.auth.token().await?;

        let url = format!("{}/speech:recognize", self.endpoint);
        let body = json!({
            "config": {
                "encoding": "LINEAR16",
                "sampleRateHertz": RECOGNITION_SAMPLE_RATE,
                "languageCode": RECOGNITION_LANGUAGE,
            },
            "audio": {
                "content": BASE64.encode(audio),
            },
        });

        debug!(bytes = audio.len(), "Forwarding recognition request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Recognition(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Recognition(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let recognition: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Recognition(format!("invalid provider response: {}", e)))?;

        Ok(recognition
            .results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next())
            .map(|alternative| alternative.transcript))
    }
}
