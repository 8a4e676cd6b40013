//! Conversation log storage
//!
//! Append-only record of chat messages, in insertion order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message in the chat window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    fn new(text: String, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            is_bot,
            timestamp: Utc::now(),
        }
    }
}

/// Conversation log for one chat window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    messages: Vec<ConversationMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Messages are never reordered or removed.
    pub fn push(&mut self, message: ConversationMessage) -> &ConversationMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ConversationMessage {
        self.push(ConversationMessage::user(text))
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> &ConversationMessage {
        self.push(ConversationMessage::bot(text))
    }

    // =============================
    // Iterators (ZERO ALLOCATION)
    // =============================

    pub fn messages(&self) -> impl DoubleEndedIterator<Item = &ConversationMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the log as a plain-text transcript
    pub fn transcript(&self, bot_name: &str) -> String {
        let mut out = String::new();

        for msg in &self.messages {
            let who = if msg.is_bot { bot_name } else { "You" };
            out.push_str(&format!(
                "[{}] {}: {}\n",
                msg.timestamp.format("%H:%M:%S"),
                who,
                msg.text
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = ConversationMessage::user("What are the fees?");
        assert!(!msg.is_bot);
        assert_eq!(msg.text, "What are the fees?");

        let reply = ConversationMessage::bot("Saving with Gullak is free.");
        assert!(reply.is_bot);
        assert_ne!(msg.id, reply.id);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut log = ConversationLog::new();
        for i in 0..10 {
            log.push_user(format!("Question {}", i));
            log.push_bot(format!("Answer {}", i));
        }

        assert_eq!(log.len(), 20);
        let texts: Vec<_> = log.messages().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[0], "Question 0");
        assert_eq!(texts[1], "Answer 0");
        assert_eq!(texts[19], "Answer 9");
    }

    #[test]
    fn test_last_message() {
        let mut log = ConversationLog::new();
        assert!(log.last().is_none());
        log.push_user("one");
        log.push_bot("two");
        log.push_user("three");

        assert_eq!(log.last().map(|m| m.text.as_str()), Some("three"));
    }

    #[test]
    fn test_transcript() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        log.push_user("hi");
        log.push_bot("hello");

        let transcript = log.transcript("Gullak");
        assert!(transcript.contains("You: hi"));
        assert!(transcript.contains("Gullak: hello"));
    }
}
