//! Command-line interface definition for Savant
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot questions, and
//! history management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Savant - Conversational study assistant CLI
///
/// Ask questions, look up topics, and keep a persistent chat history
/// across sessions.
#[derive(Parser, Debug, Clone)]
#[command(name = "savant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the history database path
    #[arg(long, env = "SAVANT_HISTORY_DB")]
    pub storage_path: Option<String>,

    /// Disable spoken replies for this run
    #[arg(long)]
    pub no_speech: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Savant
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Resume an existing session by id instead of starting fresh
        #[arg(short, long)]
        resume: Option<String>,
    },

    /// Ask a single question and exit
    Ask {
        /// The question to ask
        query: Vec<String>,
    },

    /// Inspect stored chat sessions
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Export all chat sessions to a JSON file
    Export {
        /// Output path; defaults to savant_chat_history.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List stored sessions, newest first
    List,
    /// Show the messages of one session
    Show {
        /// Session id
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_command_parses() {
        let cli = Cli::try_parse_from(["savant", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat { resume: None }));
    }

    #[test]
    fn test_chat_resume_flag() {
        let cli = Cli::try_parse_from(["savant", "chat", "--resume", "01ABC"]).unwrap();
        match cli.command {
            Commands::Chat { resume } => assert_eq!(resume.as_deref(), Some("01ABC")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::try_parse_from(["savant", "ask", "what", "is", "rust"]).unwrap();
        match cli.command {
            Commands::Ask { query } => assert_eq!(query.join(" "), "what is rust"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_subcommands() {
        let cli = Cli::try_parse_from(["savant", "history", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                command: HistoryCommand::List
            }
        ));

        let cli = Cli::try_parse_from(["savant", "history", "show", "01ABC"]).unwrap();
        match cli.command {
            Commands::History {
                command: HistoryCommand::Show { id },
            } => assert_eq!(id, "01ABC"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_output_flag() {
        let cli = Cli::try_parse_from(["savant", "export", "--output", "/tmp/out.json"]).unwrap();
        match cli.command {
            Commands::Export { output } => {
                assert_eq!(output, Some(PathBuf::from("/tmp/out.json")))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_command_is_an_error() {
        assert!(Cli::try_parse_from(["savant"]).is_err());
    }
}
