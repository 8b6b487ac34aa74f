//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::google::{GoogleAuth, SpeechClient, TtsClient};
use crate::core::providers::openai::ChatClient;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in `Arc` for sharing across workers. The
/// Google clients hold the same `GoogleAuth` as the credentials route,
/// so every speech-related request reuses one cached access token.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Chat-completion client
    pub chat: Arc<ChatClient>,
    /// Google credential holder
    pub auth: Arc<GoogleAuth>,
    /// Speech-to-Text client
    pub speech: Arc<SpeechClient>,
    /// Text-to-Speech client
    pub tts: Arc<TtsClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        chat: ChatClient,
        auth: Arc<GoogleAuth>,
        speech: SpeechClient,
        tts: TtsClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            chat: Arc::new(chat),
            auth,
            speech: Arc::new(speech),
            tts: Arc::new(tts),
        }
    }
}
