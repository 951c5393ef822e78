use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod parse;
mod scrape;
mod submit;

#[derive(Debug, Parser)]
#[command(name = "portagem")]
#[command(about = "Portuguese highway toll tariff scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the tariff sources, parse the downloaded PDF, and export.
    Scrape {
        /// Submit the exported records to the configured toll API.
        #[arg(long)]
        submit: bool,
        /// Print the configured sources without fetching anything.
        #[arg(long)]
        dry_run: bool,
    },
    /// Parse a previously downloaded tariff PDF and export the result.
    Parse {
        /// Path to the tariff PDF.
        pdf_path: PathBuf,
    },
    /// Submit a previously exported JSON file to the toll API.
    Submit {
        /// Path to a JSON export produced by `scrape` or `parse`.
        json_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = portagem_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape { submit, dry_run } => scrape::run_scrape(&config, submit, dry_run).await,
        Commands::Parse { pdf_path } => parse::run_parse(&config, &pdf_path),
        Commands::Submit { json_path } => submit::run_submit(&config, &json_path).await,
    }
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
