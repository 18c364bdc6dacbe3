//! Savant - Conversational study assistant library
//!
//! This library provides the core functionality for the Savant assistant,
//! including the command classification cascade, session persistence,
//! markup rendering, and encyclopedia lookup.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `router`: Ordered command classification cascade and reply types
//! - `session`: Chat sessions, messages, and the persistent store
//! - `storage`: Key-value persistence backends (sled, in-memory)
//! - `markup`: Line-oriented markup renderer producing abstract blocks
//! - `lookup`: Wikipedia-style summary lookup with disambiguation retry
//! - `speech`: Speech synthesis coordination and backend abstraction
//! - `ui`: Terminal presentation of blocks, actions, and history
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use savant::config::Config;
//! use savant::router::CommandRouter;
//! use savant::lookup::SummaryLookup;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let lookup = SummaryLookup::new(config.lookup.api_base.clone(), config.lookup_timeout())?;
//!     let router = CommandRouter::new(lookup);
//!     let reply = router.respond("open github").await;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod markup;
pub mod router;
pub mod session;
pub mod speech;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SavantError};
pub use lookup::{Summary, SummaryLookup};
pub use markup::{Block, ListKind, Span};
pub use router::{Action, CommandRouter, Reply};
pub use session::{ChatSession, Message, Sender, SessionStore};
pub use storage::{KvStore, MemoryStore, SledStore};
