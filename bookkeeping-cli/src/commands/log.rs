//! Log command handlers
//!
//! Handles creating, listing and viewing log entries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bookkeeping_client::{BookkeepingClient, LogApi};
use bookkeeping_core::domain::log::{Log, LogOrigin};
use bookkeeping_core::dto::log::{ArrayOfLogsResponse, CreateLog, LogListQuery};
use clap::Subcommand;
use colored::*;
use tracing::debug;

use crate::config::Config;

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// Create a new log entry
    Create {
        /// Heading of the entry
        #[arg(long, required_unless_present = "from_json")]
        title: Option<String>,

        /// Body of the entry
        #[arg(long, required_unless_present = "from_json")]
        text: Option<String>,

        /// ID of the log this entry replies to
        #[arg(long)]
        parent: Option<i64>,

        /// Runs this entry is about, sent as given
        #[arg(long)]
        run_numbers: Option<String>,

        /// Read the whole request from a JSON file instead
        #[arg(long, conflicts_with_all = ["title", "text", "parent", "run_numbers"])]
        from_json: Option<PathBuf>,
    },
    /// List log entries
    List {
        /// Number of entries to skip
        #[arg(long)]
        offset: Option<u32>,

        /// Maximum number of entries to show
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get log entry details
    Get {
        /// Log ID
        id: i64,
    },
}

/// Handle log commands
///
/// Builds a client from the configuration and runs the command against it.
pub async fn handle_log_command(command: LogCommands, config: &Config) -> Result<()> {
    let mut client = BookkeepingClient::new(config.base_url.as_str());
    if let Some(token) = &config.token {
        client = client.with_token(token.as_str());
    }

    run_log_command(&client, command, config.json).await
}

/// Run a log command against any [`LogApi`]
async fn run_log_command(api: &dyn LogApi, command: LogCommands, json: bool) -> Result<()> {
    match command {
        LogCommands::Create {
            title,
            text,
            parent,
            run_numbers,
            from_json,
        } => {
            let req = match from_json {
                Some(path) => read_create_request(&path)?,
                None => build_create_request(title, text, parent, run_numbers)?,
            };
            create_log(api, &req, json).await
        }
        LogCommands::List { offset, limit } => {
            list_logs(api, &LogListQuery { offset, limit }, json).await
        }
        LogCommands::Get { id } => get_log(api, id, json).await,
    }
}

/// Build a creation request from command-line flags
///
/// Flags that were not given stay unset in the request.
fn build_create_request(
    title: Option<String>,
    text: Option<String>,
    parent: Option<i64>,
    run_numbers: Option<String>,
) -> Result<CreateLog> {
    let title = title.context("--title is required")?;
    let text = text.context("--text is required")?;

    let mut req = CreateLog::new(title, text);
    req.parent_log_id = parent;
    req.run_numbers = run_numbers;
    Ok(req)
}

/// Load a serialized creation request from disk
fn read_create_request(path: &Path) -> Result<CreateLog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file: {}", path.display()))
}

/// Create a log entry and display it
async fn create_log(api: &dyn LogApi, req: &CreateLog, json: bool) -> Result<()> {
    debug!(title = %req.title, "Creating log");
    let log = api.create_log(req).await?;

    if json {
        print_json(&log)?;
    } else {
        println!("{}", format!("✓ Created log {}", log.id).green().bold());
        println!();
        print_log_details(&log);
    }

    Ok(())
}

/// List a page of log entries
async fn list_logs(api: &dyn LogApi, query: &LogListQuery, json: bool) -> Result<()> {
    let page = api.list_logs(query).await?;

    if json {
        return print_json(&page);
    }

    if page.data.is_empty() {
        println!("{}", "No logs found.".yellow());
    } else {
        println!("{}", page_heading(&page).bold());
        println!();
        for log in &page.data {
            print_log_summary(log);
        }
    }

    Ok(())
}

/// Get and display a single log entry
async fn get_log(api: &dyn LogApi, id: i64, json: bool) -> Result<()> {
    let log = api.get_log(id).await?;

    if json {
        print_json(&log)
    } else {
        print_log_details(&log);
        Ok(())
    }
}

fn page_heading(page: &ArrayOfLogsResponse) -> String {
    match &page.meta {
        Some(meta) => format!(
            "Showing {} of {} log(s), {} page(s):",
            page.data.len(),
            meta.page.total_count,
            meta.page.page_count
        ),
        None => format!("Found {} log(s):", page.data.len()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
    println!("{}", pretty);
    Ok(())
}

/// Print a one-entry summary
fn print_log_summary(log: &Log) {
    println!("  {} #{} {}", "▸".cyan(), log.id.to_string().dimmed(), log.title.bold());
    if let Some(author) = &log.author {
        println!("    Author:  {}", author.name.dimmed());
    }
    if let Some(created) = log.created_at {
        println!(
            "    Created: {}",
            created.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    if let Some(parent) = log.parent_log_id {
        println!("    Reply to: #{}", parent);
    }
    println!();
}

/// Print detailed log information
fn print_log_details(log: &Log) {
    println!("{}", "Log Details:".bold());
    println!("  ID:       {}", log.id.to_string().cyan());
    println!("  Title:    {}", log.title);

    if let Some(origin) = log.origin {
        let origin_str = origin.to_string();
        let origin_colored = match origin {
            LogOrigin::Human => origin_str.green(),
            LogOrigin::Process => origin_str.dimmed(),
        };
        println!("  Origin:   {}", origin_colored);
    }
    if let Some(subtype) = log.subtype {
        println!("  Type:     {}", subtype);
    }
    if let Some(author) = &log.author {
        println!("  Author:   {}", author);
    }
    if let Some(created) = log.created_at {
        println!("  Created:  {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(parent) = log.parent_log_id {
        println!("  Reply to: #{}", parent);
    }

    let runs = log.run_numbers();
    if !runs.is_empty() {
        let runs: Vec<String> = runs.iter().map(i64::to_string).collect();
        println!("  Runs:     {}", runs.join(", "));
    }

    println!("\n{}", "Text:".bold());
    println!("{}", log.text);

    if !log.attachments.is_empty() {
        println!("\n{}", "Attachments:".bold());
        for attachment in &log.attachments {
            println!("  {} {}", "📎".dimmed(), attachment.display_name());
        }
    }
}
