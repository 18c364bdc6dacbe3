//! Savant - Conversational study assistant CLI
//!
//! Main entry point for the Savant application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use savant::cli::{Cli, Commands, HistoryCommand};
use savant::commands;
use savant::config::Config;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // If the user supplied a storage path on the CLI (or via env), mirror
    // it into SAVANT_HISTORY_DB so the storage initializer can pick it up.
    if let Some(db_path) = &cli.storage_path {
        std::env::set_var("SAVANT_HISTORY_DB", db_path);
        tracing::info!("Using storage DB override from CLI: {}", db_path);
    }

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(Path::new(config_path))?;

    // Execute command
    match cli.command {
        Commands::Chat { resume } => {
            commands::chat::run_chat(config, resume, cli.no_speech).await?;
        }
        Commands::Ask { query } => {
            commands::ask::run_ask(config, query).await?;
        }
        Commands::History { command } => {
            let store = commands::open_store(&config)?;
            match command {
                HistoryCommand::List => commands::history::run_list(&store)?,
                HistoryCommand::Show { id } => commands::history::run_show(&store, &id)?,
            }
        }
        Commands::Export { output } => {
            commands::export::run_export(config, output)?;
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber with env-filter support
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("savant=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
