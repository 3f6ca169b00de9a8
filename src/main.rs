use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use being_buddy::agent::BuddyAgent;
use being_buddy::channels::web::{WebState, serve};
use being_buddy::config::Config;
use being_buddy::llm::{GeminiAugmenter, TextAugmenter};
use being_buddy::store::{DiaryStore, MemoryStore};

#[derive(Debug, Parser)]
#[command(name = "being-buddy", version, about = "Wellbeing companion service")]
struct Cli {
    /// Address to bind the web channel to.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store: Arc<dyn DiaryStore> = Arc::new(MemoryStore::new());

    let augmenter: Option<Arc<dyn TextAugmenter>> = if config.llm.is_enabled() {
        match GeminiAugmenter::new(config.llm.clone()) {
            Ok(augmenter) => {
                tracing::info!(model = augmenter.model_name(), "Generative augmentation enabled");
                Some(Arc::new(augmenter))
            }
            Err(e) => {
                tracing::warn!("Failed to initialize augmenter, running deterministic-only: {}", e);
                None
            }
        }
    } else {
        tracing::info!("No GEMINI_API_KEY configured, running deterministic-only");
        None
    };

    let agent = BuddyAgent::new(Arc::clone(&store), augmenter);
    let state = Arc::new(WebState { agent, store });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    serve(addr, state).await?;

    Ok(())
}
