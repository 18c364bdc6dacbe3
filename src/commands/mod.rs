/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `chat`    — Interactive chat session
- `ask`     — One-shot question
- `history` — List and show stored sessions
- `export`  — Dump all sessions to JSON

These handlers are intentionally small and use the library components:
the session store, the command router, and the terminal UI.
*/

use crate::config::Config;
use crate::error::Result;
use crate::lookup::SummaryLookup;
use crate::router::CommandRouter;
use crate::session::SessionStore;
use crate::speech::{NullBackend, Synthesizer};
use crate::storage::{KvStore, SledStore};
use std::sync::Arc;

// Slash command parser for the interactive session
pub mod special_commands;

// History inspection handlers
pub mod history;

/// Open the session store described by the configuration
pub fn open_store(config: &Config) -> Result<SessionStore> {
    let kv: Box<dyn KvStore> = match &config.storage.path {
        Some(path) => Box::new(SledStore::open(path)?),
        None => Box::new(SledStore::open_default()?),
    };
    SessionStore::open(kv)
}

/// Build the command router described by the configuration
pub fn build_router(config: &Config) -> Result<CommandRouter> {
    let lookup = SummaryLookup::new(config.lookup.api_base.clone(), config.lookup_timeout())?;
    Ok(CommandRouter::new(lookup))
}

/// Build the speech synthesizer described by the configuration
///
/// The terminal build has no audio output, so the synthesizer always
/// wraps the null backend; the configuration flag still controls whether
/// speaking is attempted at all.
pub fn build_synthesizer(config: &Config, no_speech: bool) -> Synthesizer {
    let enabled = config.speech.enabled && !no_speech;
    Synthesizer::new(Arc::new(NullBackend), enabled)
}

// Chat command handler
pub mod chat {
    //! Interactive chat session handler.
    //!
    //! Runs a readline loop that routes regular input through the command
    //! cascade and handles slash commands locally. Every routed turn is
    //! persisted as a user/assistant message pair before rendering.

    use super::special_commands::{parse_special_command, print_help, SpecialCommand};
    use super::*;
    use crate::markup;
    use crate::router::Reply;
    use crate::session::{Sender, EXPORT_FILENAME};
    use crate::speech::Synthesizer;
    use crate::ui;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `resume` - Optional session id to resume instead of starting fresh
    /// * `no_speech` - Disable spoken replies regardless of configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the terminal
    /// cannot be read.
    pub async fn run_chat(config: Config, resume: Option<String>, no_speech: bool) -> Result<()> {
        tracing::info!("Starting interactive chat session");

        let mut store = open_store(&config)?;
        let router = build_router(&config)?;
        let synth = build_synthesizer(&config, no_speech);
        let mut speech_on = config.speech.enabled && !no_speech;

        if let Some(id) = resume {
            if store.switch_to(&id) {
                tracing::info!("Resumed session {}", id);
            } else {
                println!("{}", format!("No session with id '{}'.", id).yellow());
            }
        }

        let mut rl = DefaultEditor::new()?;

        println!("{}", "Savant - ask me anything. /help for commands.".bold());
        println!();

        loop {
            match rl.readline("you> ") {
                Ok(line) => {
                    if is_blank(&line) {
                        continue;
                    }
                    let trimmed = line.trim();

                    match parse_special_command(trimmed) {
                        SpecialCommand::NewSession => {
                            let id = store.create_session()?;
                            println!("Started new chat ({})\n", id);
                            continue;
                        }
                        SpecialCommand::History => {
                            ui::render_history_list(&store.list_sessions(), store.active_id());
                            continue;
                        }
                        SpecialCommand::Switch(id) => {
                            if store.switch_to(&id) {
                                println!("Switched to session {}\n", id);
                            } else {
                                println!("{}", format!("No session with id '{}'.", id).yellow());
                            }
                            continue;
                        }
                        SpecialCommand::Export(path) => {
                            let target = path.unwrap_or_else(|| EXPORT_FILENAME.to_string());
                            std::fs::write(&target, store.export_json()?)?;
                            println!("Exported {} session(s) to {}\n", store.len(), target);
                            continue;
                        }
                        SpecialCommand::Speak(on) => {
                            speech_on = on;
                            println!("Speech {}\n", if on { "on" } else { "off" });
                            continue;
                        }
                        SpecialCommand::Help => {
                            print_help();
                            continue;
                        }
                        SpecialCommand::Exit => break,
                        SpecialCommand::Unknown(message) => {
                            println!("{}\n", message.yellow());
                            continue;
                        }
                        SpecialCommand::None => {}
                    }

                    rl.add_history_entry(trimmed)?;

                    let reply = run_turn(&mut store, &router, trimmed).await?;
                    present_reply(&reply, speech_on, &synth)?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Whether a line of input is ignored entirely
    ///
    /// Blank input is a strict no-op: no stored message, no readline
    /// history entry, no routing.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    /// Route one user turn and persist both sides of the exchange
    ///
    /// The user message is stored before routing, so the transcript keeps
    /// the question even if rendering fails afterwards.
    pub async fn run_turn(
        store: &mut SessionStore,
        router: &CommandRouter,
        input: &str,
    ) -> Result<Reply> {
        store.append_message(Sender::User, input)?;
        let reply = router.respond(input).await;
        store.append_message(Sender::Assistant, &reply.text)?;
        Ok(reply)
    }

    /// Render a reply to the terminal, thumbnail last, then speak it
    pub fn present_reply(reply: &Reply, speech_on: bool, synth: &Synthesizer) -> Result<()> {
        ui::render_blocks(&markup::render(&reply.text));
        if let Some(action) = &reply.action {
            ui::render_action(action);
        }
        if let Some(thumbnail) = &reply.thumbnail {
            ui::render_thumbnail(thumbnail);
        }
        println!();

        if speech_on && !synth.speak(&reply.speech)? && synth.should_notify_unsupported() {
            ui::notify_unsupported_feature("speech output");
        }
        Ok(())
    }
}

// One-shot question handler
pub mod ask {
    //! One-shot question handler.
    //!
    //! Routes a single question, persists the exchange like any chat turn,
    //! prints the reply, and exits.

    use super::chat::{present_reply, run_turn};
    use super::*;
    use crate::error::SavantError;

    /// Ask a single question and print the reply
    ///
    /// # Errors
    ///
    /// Returns an error if the question is empty or the store cannot be
    /// opened.
    pub async fn run_ask(config: Config, words: Vec<String>) -> Result<()> {
        let question = words.join(" ");
        let question = question.trim();
        if question.is_empty() {
            return Err(SavantError::Config("ask requires a question".to_string()).into());
        }

        let mut store = open_store(&config)?;
        let router = build_router(&config)?;
        let synth = build_synthesizer(&config, true);

        let reply = run_turn(&mut store, &router, question).await?;
        present_reply(&reply, false, &synth)?;
        Ok(())
    }
}

// Export command handler
pub mod export {
    //! Export handler: dump every stored session to a JSON file.

    use super::*;
    use crate::session::EXPORT_FILENAME;
    use std::path::PathBuf;

    /// Export all sessions to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the file cannot
    /// be written.
    pub fn run_export(config: Config, output: Option<PathBuf>) -> Result<()> {
        let store = open_store(&config)?;
        let target = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
        std::fs::write(&target, store.export_json()?)?;
        println!("Exported {} session(s) to {}", store.len(), target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Sender;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    fn offline_router() -> CommandRouter {
        let lookup =
            SummaryLookup::new("http://127.0.0.1:9", Duration::from_millis(100)).expect("client");
        CommandRouter::new(lookup)
    }

    #[tokio::test]
    async fn test_run_turn_persists_both_sides() {
        let mut store = SessionStore::open(Box::new(MemoryStore::new())).unwrap();
        let router = offline_router();

        let reply = chat::run_turn(&mut store, &router, "open github").await.unwrap();
        assert_eq!(reply.text, "Opening github...");

        let id = store.active_id().unwrap().to_string();
        let session = store.get(&id).unwrap();
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].sender, Sender::User);
        assert_eq!(session.messages[0].content, "open github");
        assert_eq!(session.messages[1].sender, Sender::Assistant);
        assert_eq!(session.messages[1].content, "Opening github...");
        // First user message becomes the title
        assert_eq!(session.title, "open github");
    }

    #[tokio::test]
    async fn test_consecutive_turns_share_a_session() {
        let mut store = SessionStore::open(Box::new(MemoryStore::new())).unwrap();
        let router = offline_router();

        chat::run_turn(&mut store, &router, "open github").await.unwrap();
        chat::run_turn(&mut store, &router, "docker").await.unwrap();

        assert_eq!(store.len(), 1);
        let id = store.active_id().unwrap().to_string();
        assert_eq!(store.get(&id).unwrap().messages.len(), 4);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        assert!(chat::is_blank(""));
        assert!(chat::is_blank("   \t  "));
        assert!(chat::is_blank("\n"));
        assert!(!chat::is_blank(" hi "));
    }

    #[tokio::test]
    async fn test_whitespace_only_ask_leaves_storage_untouched() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("ask.db");
        let mut config = Config::default();
        config.storage.path = Some(db_path.clone());

        let result = ask::run_ask(config, vec!["   ".to_string(), "\t".to_string()]).await;
        assert!(result.is_err());
        // The guard fires before the store is opened, so nothing was
        // created on disk and no session could have been mutated.
        assert!(!db_path.exists());
    }

    #[test]
    fn test_build_synthesizer_honors_no_speech_flag() {
        let config = Config::default();
        assert!(config.speech.enabled);
        let synth = build_synthesizer(&config, true);
        assert!(!synth.is_supported());
    }
}
