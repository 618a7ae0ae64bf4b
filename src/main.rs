use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidgrab::{
    config::Config,
    errors::AppError,
    extractors::ExtractorRegistry,
    utils::http_client::StandardHttpClient,
};

#[derive(Parser)]
#[command(name = "vidgrab")]
#[command(version = "0.1.0")]
#[command(about = "Resolve a watch-page URL into direct media URLs")]
#[command(long_about = None)]
struct Cli {
    /// Watch-page URL to resolve
    url: String,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Print compact JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = format!("vidgrab={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_from_file(&cli.config)?;
    let client = Arc::new(StandardHttpClient::from_config(&config.http));
    let registry = ExtractorRegistry::new(client);

    match registry.extract(&cli.url).await {
        Ok(result) => {
            info!(
                "Resolved {} ('{}') into {} media segment(s)",
                result.id(),
                result.title(),
                result.entry_count()
            );
            let json = if cli.compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{json}");
            Ok(())
        }
        Err(e) if e.is_expected() => {
            // Anticipated site-side condition; report it without a debug dump
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
        Err(e @ AppError::Extractor(_)) => Err(anyhow::anyhow!("extraction failed: {e}")),
        Err(e) => Err(e.into()),
    }
}
