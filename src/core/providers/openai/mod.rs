//! OpenAI-compatible chat-completion provider

mod client;
mod models;

pub use client::ChatClient;
pub use models::{ChatChoice, ChatCompletionResponse};
