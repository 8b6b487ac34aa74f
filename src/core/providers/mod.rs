//! Provider clients
//!
//! Thin handles around the remote services the gateway relays to: an
//! OpenAI-compatible chat-completion API and the Google Cloud speech
//! services.

pub mod google;
pub mod openai;
