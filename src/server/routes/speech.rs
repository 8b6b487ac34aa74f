//! Speech-to-text endpoint
//!
//! Accepts a multipart form with a single `audio` file field (raw PCM16
//! mono 16 kHz, Spanish) and returns the first alternative's transcript
//! of the first result. A provider response with no results is a 400,
//! never a 200 with an empty transcript.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use serde::Serialize;
use tracing::info;

use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// Transcription response body
#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    /// Recognized text
    pub transcription: String,
}

/// Speech-to-text endpoint
pub async fn speech_to_text(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, GatewayError> {
    let mut audio: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| GatewayError::Validation(format!("invalid multipart data: {}", e)))?;

        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("audio") => {
                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    let bytes = chunk.map_err(|e| {
                        GatewayError::Validation(format!("error reading audio field: {}", e))
                    })?;
                    data.extend_from_slice(&bytes);
                }
                audio = Some(data);
            }
            _ => {
                // Drain unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let audio = match audio {
        Some(data) if !data.is_empty() => data,
        _ => {
            return Err(GatewayError::Validation(
                "no audio file was provided".to_string(),
            ));
        }
    };

    info!(bytes = audio.len(), "Speech-to-text request");

    let transcription = state.speech.recognize(&audio).await?.ok_or_else(|| {
        GatewayError::Recognition("the audio could not be transcribed".to_string())
    })?;

    Ok(HttpResponse::Ok().json(TranscriptionResponse { transcription }))
}
