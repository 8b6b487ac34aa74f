//! Core gateway functionality: provider clients and shared types

pub mod providers;
pub mod types;
