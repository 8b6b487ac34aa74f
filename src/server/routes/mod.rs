//! HTTP route modules
//!
//! Four independent request handlers, each a single-shot stateless
//! request/response cycle calling exactly one provider client.

pub mod chat;
pub mod credentials;
pub mod speech;
pub mod tts;

use actix_web::web;

use crate::utils::error::GatewayError;

/// Register the gateway's route table
///
/// JSON extractor failures are mapped onto `GatewayError` here so a
/// malformed body gets the same `{"error": ...}` envelope as every
/// other rejection.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        GatewayError::Validation(format!("invalid request body: {}", err)).into()
    }))
    .route("/chat", web::post().to(chat::chat))
        .route(
            "/get-credentials",
            web::get().to(credentials::get_credentials),
        )
        .route("/speech_to_text", web::post().to(speech::speech_to_text))
        .route("/text_to_speech", web::post().to(tts::text_to_speech))
        .route(
            "/health",
            web::get().to(crate::server::handlers::health_check),
        );
}
