//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod log;

pub use log::LogCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log entry management
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Log { command } => log::handle_log_command(command, config).await,
    }
}
