use dotenv::dotenv;
use enso_finance_mcp::{config, enso::EnsoClient, server, tools::ToolRegistry};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Enso Finance MCP Server...");

    let config = config::Config::from_env()?;
    if config.api_token.is_none() {
        info!("ENSO_API_TOKEN not set; every tool call must pass api_token");
    }
    let client = EnsoClient::from_config(&config)?;

    server::run(client, ToolRegistry::enso()).await?;

    Ok(())
}
