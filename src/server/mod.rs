//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod handlers;
pub mod routes;
mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
