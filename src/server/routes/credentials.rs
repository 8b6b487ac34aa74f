//! Credential handout endpoint
//!
//! Returns the process-wide Google access token, refreshing it first if
//! expired. Refresh failures surface as 400 with the provider's error
//! text embedded.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// Credentials response body
#[derive(Debug, Serialize)]
pub struct CredentialsResponse {
    /// Current access token
    pub access_token: String,
    /// Expiry as a Unix timestamp
    pub expires_in: i64,
}

/// Credentials endpoint
pub async fn get_credentials(
    state: web::Data<AppState>,
) -> Result<HttpResponse, GatewayError> {
    let token = state.auth.token().await?;

    debug!(expires_at = %token.expires_at, "Handing out access token");

    Ok(HttpResponse::Ok().json(CredentialsResponse {
        access_token: token.token,
        expires_in: token.expires_at.timestamp(),
    }))
}
