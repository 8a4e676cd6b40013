//! Chat memory
//!
//! Holds the conversation log of a chat window. Each input is still
//! classified on its own; the log is only presentational.

pub mod store;

pub use store::{ConversationLog, ConversationMessage};
