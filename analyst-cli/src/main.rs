//! Analyst CLI
//!
//! Command-line interface for the document analysis service: upload a
//! transcript, wait for the remote analysis to finish, and print the
//! markdown report.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "analyst")]
#[command(about = "Document analysis client", long_about = None)]
struct Cli {
    /// Analysis service base URL
    #[arg(
        long,
        env = "ANALYST_API_BASE",
        default_value = "http://localhost:8080"
    )]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analyst_cli=info,analyst_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_base: cli.api_base,
    };

    handle_command(cli.command, &config).await
}
