//! # habla-gateway
//!
//! A small HTTP gateway that relays user input to a hosted
//! OpenAI-compatible chat-completion API and to Google Cloud speech
//! services (Speech-to-Text and Text-to-Speech).
//!
//! Every substantive behavior is delegated to the remote providers; the
//! gateway validates input, forwards it, and translates the provider's
//! response into an HTTP response. Routes are stateless and independent;
//! the cached Google access token is the only process-wide mutable state.
//!
//! ## Running the gateway
//!
//! ```rust,no_run
//! use habla_gateway::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = server::HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::types::{ChatMessage, MessageRole};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, env!("CARGO_PKG_NAME"));
    }
}
