//! Bookkeeping CLI
//!
//! Command-line interface for creating and reading Bookkeeping log entries.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookkeeping")]
#[command(about = "ALICE Bookkeeping log CLI", long_about = None)]
struct Cli {
    /// Bookkeeping service URL
    #[arg(long, env = "BOOKKEEPING_URL", default_value = "http://localhost:4000")]
    url: String,

    /// API token
    #[arg(long, env = "BOOKKEEPING_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookkeeping_cli=warn,bookkeeping_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.url,
        token: cli.token,
        json: cli.json,
    };

    handle_command(cli.command, &config).await
}
