//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::providers::google::{GoogleAuth, SpeechClient, TtsClient};
use crate::core::providers::openai::ChatClient;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with provider clients built from `config`
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let auth = Arc::new(GoogleAuth::from_file(&config.google.credentials_path).await?);
        let chat = ChatClient::new(&config.chat);
        let speech = SpeechClient::new(Arc::clone(&auth), &config.google.speech_endpoint);
        let tts = TtsClient::new(Arc::clone(&auth), &config.google.tts_endpoint);

        let state = AppState::new(config.clone(), chat, auth, speech, tts);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.bind_addr();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                // The gateway fronts a browser client
                .wrap(Cors::permissive())
                .wrap(Logger::default())
                .configure(routes::configure)
        })
        .bind(&bind_addr)
        .map_err(|e| GatewayError::Config(format!("failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::Internal(format!("server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
