//! Text-to-speech endpoint
//!
//! Accepts `{"text": ...}` and returns the synthesized speech as a
//! downloadable MP3 attachment. Empty text is rejected before any
//! upstream call; synthesis failures surface as 500.

use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// Filename of the returned attachment
const ATTACHMENT_FILENAME: &str = "response.mp3";

/// Synthesis request body
#[derive(Debug, Deserialize)]
pub struct SynthesisRequest {
    /// Text to synthesize
    #[serde(default)]
    pub text: String,
}

/// Text-to-speech endpoint
pub async fn text_to_speech(
    state: web::Data<AppState>,
    request: web::Json<SynthesisRequest>,
) -> Result<HttpResponse, GatewayError> {
    let text = request.into_inner().text;
    if text.trim().is_empty() {
        return Err(GatewayError::Validation("no text was provided".to_string()));
    }

    info!(chars = text.len(), "Text-to-speech request");

    let audio = state.tts.synthesize(&text).await?;

    Ok(HttpResponse::Ok()
        .content_type("audio/mp3")
        .insert_header(ContentDisposition::attachment(ATTACHMENT_FILENAME))
        .body(audio))
}
