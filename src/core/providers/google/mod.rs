//! Google Cloud speech providers
//!
//! Service-account authentication plus thin REST clients for
//! Speech-to-Text and Text-to-Speech. All three share one cached access
//! token.

pub mod auth;
pub mod speech;
pub mod tts;

pub use auth::{AccessToken, GoogleAuth, ServiceAccountKey};
pub use speech::SpeechClient;
pub use tts::TtsClient;
