//! Shared test infrastructure
//!
//! Builds an `AppState` whose provider clients point at wiremock
//! stand-ins for the chat, token, recognition and synthesis endpoints.

#![allow(dead_code)]

use actix_web::web;
use habla_gateway::config::{ChatConfig, Config, GoogleConfig, ServerConfig};
use habla_gateway::core::providers::google::{
    GoogleAuth, ServiceAccountKey, SpeechClient, TtsClient,
};
use habla_gateway::core::providers::openai::ChatClient;
use habla_gateway::server::AppState;
use std::sync::Arc;

/// RSA key used only by the test suite
pub const TEST_PRIVATE_KEY: &str = include_str!("test_key.pem");

/// Service-account key pointing at a test token endpoint
pub fn service_account_key(token_uri: &str) -> ServiceAccountKey {
    ServiceAccountKey {
        key_type: "service_account".to_string(),
        project_id: "test-project".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        client_email: "gateway@test-project.iam.gserviceaccount.com".to_string(),
        token_uri: token_uri.to_string(),
    }
}

/// Build application state with every provider pointed at test servers
pub fn test_state(
    chat_base: &str,
    token_uri: &str,
    speech_endpoint: &str,
    tts_endpoint: &str,
) -> web::Data<AppState> {
    let config = Config {
        server: ServerConfig::default(),
        chat: ChatConfig {
            api_key: "test-key".to_string(),
            base_url: chat_base.to_string(),
            model: "test-model".to_string(),
        },
        google: GoogleConfig {
            credentials_path: "unused".to_string(),
            speech_endpoint: speech_endpoint.to_string(),
            tts_endpoint: tts_endpoint.to_string(),
        },
    };

    let auth = Arc::new(GoogleAuth::new(service_account_key(token_uri)).unwrap());
    let chat = ChatClient::new(&config.chat);
    let speech = SpeechClient::new(Arc::clone(&auth), speech_endpoint);
    let tts = TtsClient::new(Arc::clone(&auth), tts_endpoint);

    web::Data::new(AppState::new(config, chat, auth, speech, tts))
}

/// Encode a single-file multipart form body
pub fn multipart_file(boundary: &str, field_name: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"audio.raw\"\r\n",
            field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
