use anyhow::Context;
use clap::Parser;
use fx_exchange::infrastructure::config::StorageConfig;
use fx_exchange::{QuoteExchange, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FX quote exchange: REST API and live quote stream
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Load configuration from JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Server host
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Server port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// SQLite URL; switches storage to SQLite (e.g. sqlite://quotes.db)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Do not load seed quotes at startup
    #[arg(long)]
    no_seed: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                ServiceConfig::from_file(path)
                    .with_context(|| format!("loading configuration from {}", path))?
            }
            None => {
                tracing::info!("Using default configuration with sample quotes");
                ServiceConfig::with_sample_quotes()
            }
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.database_url {
            config.storage = StorageConfig {
                max_connections: config.storage.max_connections,
                ..StorageConfig::sqlite(url.clone())
            };
        }
        if self.no_seed {
            config.seed.quotes.clear();
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fx_exchange=info,tower_http=debug".into()),
        )
        .with(cli.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!cli.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    let config = cli.load_config()?;
    tracing::info!("Service: {}", config.name);
    tracing::info!("Storage: {:?} ({})", config.storage.backend, config.storage.url);
    tracing::info!("Seed quotes: {}", config.seed.quotes.len());

    let exchange = QuoteExchange::from_config(config).await?;

    let base = format!(
        "http://{}:{}",
        exchange.config.server.host, exchange.config.server.port
    );
    tracing::info!("Starting FX Quote Exchange");
    tracing::info!("REST API: {}/api/exchange", base);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/exchange");
    tracing::info!("  POST /api/exchange");
    tracing::info!("  GET  /api/exchange/realtime");
    tracing::info!("  GET  /api/exchange/profile/search?profile=LOW&date=2025-05-09");

    exchange.run().await?;
    Ok(())
}
