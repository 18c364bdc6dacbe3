//! History inspection command handlers

use crate::error::{Result, SavantError};
use crate::markup;
use crate::session::{Sender, SessionStore};
use crate::ui;
use colored::Colorize;

/// List stored sessions, newest first
pub fn run_list(store: &SessionStore) -> Result<()> {
    let sessions = store.list_sessions();
    ui::render_history_list(&sessions, store.active_id());
    Ok(())
}

/// Print the full transcript of one session
///
/// # Errors
///
/// Returns an error if the session id is unknown.
pub fn run_show(store: &SessionStore, id: &str) -> Result<()> {
    let session = store
        .get(id)
        .ok_or_else(|| SavantError::Storage(format!("no session with id '{}'", id)))?;

    println!("{} ({})", session.title.bold(), id.dimmed());
    println!();

    for message in &session.messages {
        let stamp = message.time.format("%Y-%m-%d %H:%M");
        match message.sender {
            Sender::User => {
                println!("{} {}", format!("[{}] you:", stamp).green(), message.content);
            }
            Sender::Assistant => {
                println!("{}", format!("[{}] savant:", stamp).cyan());
                ui::render_blocks(&markup::render(&message.content));
            }
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::storage::MemoryStore;

    fn store_with_one_exchange() -> SessionStore {
        let mut store = SessionStore::open(Box::new(MemoryStore::new())).unwrap();
        store.append_message(Sender::User, "what is rust").unwrap();
        store
            .append_message(Sender::Assistant, "# Rust\n\nA language.")
            .unwrap();
        store
    }

    #[test]
    fn test_show_unknown_id_errors() {
        let store = store_with_one_exchange();
        let err = run_show(&store, "NOPE").unwrap_err();
        assert!(err.to_string().contains("NOPE"));
    }

    #[test]
    fn test_show_known_id_succeeds() {
        let store = store_with_one_exchange();
        let id = store.active_id().unwrap().to_string();
        run_show(&store, &id).unwrap();
    }

    #[test]
    fn test_show_accepts_lowercase_id() {
        let store = store_with_one_exchange();
        let id = store.active_id().unwrap().to_lowercase();
        run_show(&store, &id).unwrap();
    }

    #[test]
    fn test_list_never_errors() {
        let store = store_with_one_exchange();
        run_list(&store).unwrap();
        let empty = SessionStore::open(Box::new(MemoryStore::new())).unwrap();
        run_list(&empty).unwrap();
    }
}
