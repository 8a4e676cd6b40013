use gullak_assistant::{api::start_server, config::AssistantConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AssistantConfig::from_env()?;

    info!("🚀 Gullak Assistant - API Server");
    info!("📍 Port: {}", config.port);
    info!("🌐 Default locale: {}", config.default_locale);

    start_server(config).await?;

    Ok(())
}
