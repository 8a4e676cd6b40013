use gullak_assistant::{agent::Assistant, config::AssistantConfig, voice::ConsoleSpeaker, Locale};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str =
    "Commands: /login, /logout, /lang <en|hi|mr|es|de>, /voice <transcript>, /history, /quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = AssistantConfig::from_env()?;
    info!(locale = %config.default_locale, "Gullak chat starting");

    let mut assistant = Assistant::new(config, Arc::new(ConsoleSpeaker));

    println!("=== Gullak Assistant ===");
    println!("{}", HELP);
    assistant.open_chat().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/history", _) => print!("{}", assistant.chat().log().transcript("Gullak")),
            ("/login", _) => {
                assistant.sign_in().await?;
                assistant.open_chat().await;
            }
            ("/logout", _) => {
                assistant.sign_out().await?;
                assistant.open_chat().await;
            }
            ("/lang", tag) => match tag.trim().parse::<Locale>() {
                Ok(locale) => {
                    assistant.set_locale(locale);
                    println!("Language: {}", locale);
                }
                Err(e) => warn!("{}", e),
            },
            ("/voice", transcript) => {
                let outcome = assistant.handle_transcript(transcript).await?;
                info!(command = ?outcome.command, route = %assistant.route(), "Voice command");
            }
            _ => {
                // Replies are printed by the speaker
                assistant.chat_message(line).await;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
