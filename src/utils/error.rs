//! Error handling for the gateway
//!
//! One error type covers every route. Handlers return
//! `Result<HttpResponse, GatewayError>` and propagate with `?`; the
//! `ResponseError` impl maps each variant to a status code and a flat
//! `{"error": ...}` JSON body, which is the wire contract of the service.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing caller input
    #[error("{0}")]
    Validation(String),

    /// Google credential acquisition or refresh failures
    #[error("Credential error: {0}")]
    Credentials(String),

    /// Chat provider failures
    #[error("Chat provider error: {0}")]
    ChatUpstream(String),

    /// Speech recognition failures
    #[error("Speech recognition error: {0}")]
    Recognition(String),

    /// Speech synthesis failures
    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Wire shape of every error payload
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_)
            | GatewayError::Credentials(_)
            | GatewayError::ChatUpstream(_)
            | GatewayError::Recognition(_) => StatusCode::BAD_REQUEST,
            GatewayError::Synthesis(_)
            | GatewayError::Config(_)
            | GatewayError::Serialization(_)
            | GatewayError::Io(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
