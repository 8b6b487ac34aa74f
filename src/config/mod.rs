//! Configuration management for the gateway
//!
//! Configuration is environment-first: required credentials come from the
//! process environment (or a `.env` file loaded by the binary), optional
//! settings fall back to defaults. Validation is presence-only.

use crate::utils::error::{GatewayError, Result};
use std::env;
use tracing::{debug, info};

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_CHAT_MODEL: &str = "deepseek/deepseek-r1:free";
const DEFAULT_SPEECH_ENDPOINT: &str = "https://speech.googleapis.com/v1";
const DEFAULT_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com/v1";

/// Main configuration struct for the gateway
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind options
    pub server: ServerConfig,
    /// Chat-completion provider settings
    pub chat: ChatConfig,
    /// Google Cloud speech services settings
    pub google: GoogleConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chat-completion provider configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// API key for the chat provider
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model forwarded with every completion request
    pub model: String,
}

/// Google Cloud configuration
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Path to the service-account credential file
    pub credentials_path: String,
    /// Speech-to-Text REST endpoint
    pub speech_endpoint: String,
    /// Text-to-Speech REST endpoint
    pub tts_endpoint: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let chat = ChatConfig {
            api_key: require("API_KEY")?,
            base_url: require("BASE_URL")?,
            model: var_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
        };

        let google = GoogleConfig {
            credentials_path: require("GOOGLE_APPLICATION_CREDENTIALS")?,
            speech_endpoint: var_or("GOOGLE_SPEECH_ENDPOINT", DEFAULT_SPEECH_ENDPOINT),
            tts_endpoint: var_or("GOOGLE_TTS_ENDPOINT", DEFAULT_TTS_ENDPOINT),
        };

        let server = ServerConfig {
            host: var_or("GATEWAY_HOST", DEFAULT_HOST),
            port: match env::var("GATEWAY_PORT") {
                Ok(port) => port
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid GATEWAY_PORT: {}", e)))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        debug!("Configuration loaded successfully");
        Ok(Self {
            server,
            chat,
            google,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| GatewayError::Config(format!("{} is not set", name)))
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
