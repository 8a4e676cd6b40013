//! Voice I/O adapter
//!
//! Speech recognition happens outside this crate; only its transcript comes in.
//! Responses go out through a [`Speaker`], the text-to-speech seam.

use tokio::sync::Mutex;
use tracing::info;

/// Trait for text-to-speech output
#[async_trait::async_trait]
pub trait Speaker: Send + Sync {
    async fn speak(&self, text: &str);
}

/// Prints spoken text to stdout
pub struct ConsoleSpeaker;

#[async_trait::async_trait]
impl Speaker for ConsoleSpeaker {
    async fn speak(&self, text: &str) {
        println!("🔊 {}", text);
    }
}

/// Emits spoken text as tracing events (used by the API server)
pub struct TracingSpeaker;

#[async_trait::async_trait]
impl Speaker for TracingSpeaker {
    async fn speak(&self, text: &str) {
        info!(text, "speak");
    }
}

/// Records everything spoken, in order
#[derive(Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn spoken(&self) -> Vec<String> {
        self.spoken.lock().await.clone()
    }

    pub async fn last(&self) -> Option<String> {
        self.spoken.lock().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl Speaker for RecordingSpeaker {
    async fn speak(&self, text: &str) {
        self.spoken.lock().await.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_speaker_keeps_order() {
        let speaker = RecordingSpeaker::new();
        speaker.speak("first").await;
        speaker.speak("second").await;

        assert_eq!(speaker.spoken().await, vec!["first", "second"]);
        assert_eq!(speaker.last().await.as_deref(), Some("second"));
    }
}
