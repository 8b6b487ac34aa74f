//! habla-gateway - voice assistant relay backend
//!
//! Relays chat requests to an OpenAI-compatible LLM API and audio to
//! Google Cloud speech services.

use habla_gateway::{Config, server};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> habla_gateway::Result<()> {
    let config = Config::from_env()?;
    let server = server::HttpServer::new(&config).await?;
    server.start().await
}
