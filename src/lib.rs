//! Gullak Assistant
//!
//! Voice and chat assistant for the Gullak savings demo:
//! - Classifies typed messages and voice transcripts with keyword rules
//! - Answers with localized canned responses filled from account data
//! - Drives page navigation, mock sign-in and a simulated payment flow
//! - Serves the same behavior over HTTP for the web UI
//!
//! FLOW:
//! INPUT → CLASSIFY → DISPATCH → SPEAK → SIDE EFFECT

pub mod agent;
pub mod api;
pub mod classifier;
pub mod config;
pub mod conversational;
pub mod error;
pub mod i18n;
pub mod memory;
pub mod models;
pub mod pages;
pub mod voice;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use classifier::{ChatIntent, IntentClassifier, VoiceCommand};
pub use i18n::Translator;
